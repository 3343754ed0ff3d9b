//! Chatbot question/answer history. Rows are only written for identified visitors.
use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_question")]
pub struct Model {
    /// 36-char hyphenated UUID stored as a string.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    /// Category analysis of the question (`keywords`, `category`, `subCategories`, `sentiment`).
    pub keywords: Option<Json>,
    pub user_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a new history row.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub keywords: Option<Json>,
    pub user_id: Option<String>,
    pub error: Option<String>,
}

pub async fn create(db: &DatabaseConnection, q: NewQuestion) -> Result<Model, ModelError> {
    if q.question.trim().is_empty() { return Err(ModelError::required("question")); }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        question: Set(q.question),
        answer: Set(q.answer),
        keywords: Set(q.keywords),
        user_id: Set(q.user_id),
        error: Set(q.error),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Rows for `user_id`, newest first.
pub async fn find_by_user(
    db: &DatabaseConnection,
    user_id: &str,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<Vec<Model>, ModelError> {
    let mut q = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);
    if let Some(l) = limit { q = q.limit(l); }
    if let Some(o) = offset { q = q.offset(o); }
    q.all(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
