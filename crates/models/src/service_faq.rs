//! Frequently asked questions attached to a service.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_faq")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub question: String,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
    pub index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "ServiceFaq", "serviceFaq", index = Index, search = Question);

#[derive(Debug, Clone, Deserialize)]
pub struct NewServiceFaq {
    pub service_id: Uuid,
    pub question: String,
    pub answer: String,
}

impl Draft<Entity> for NewServiceFaq {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("question", &self.question)?;
        content::require("answer", &self.answer)
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(self.service_id),
            question: Set(self.question),
            answer: Set(self.answer),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceFaqPatch {
    pub service_id: Option<Uuid>,
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Patch<Entity> for ServiceFaqPatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("question", self.question.as_ref())?;
        content::require_if_present("answer", self.answer.as_ref())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.service_id { am.service_id = Set(v); }
        if let Some(v) = self.question { am.question = Set(v); }
        if let Some(v) = self.answer { am.answer = Set(v); }
    }
}
