//! Leaf entries of the navigation menu.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity};
use crate::errors::ModelError;
use crate::sub_header;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_child_header")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sub_header_id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SubHeader,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SubHeader => Entity::belongs_to(sub_header::Entity)
                .from(Column::SubHeaderId)
                .to(sub_header::Column::Id)
                .into(),
        }
    }
}

impl Related<sub_header::Entity> for Entity {
    fn to() -> RelationDef { Relation::SubHeader.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "SubChildHeader", "header");

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubChildHeader {
    pub title: String,
    pub link: Option<String>,
}

impl NewSubChildHeader {
    pub fn validate(&self) -> Result<(), ModelError> { content::require("title", &self.title) }

    pub fn into_active_model(self, sub_header_id: Uuid) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            sub_header_id: Set(sub_header_id),
            title: Set(self.title),
            link: Set(self.link),
            ..Default::default()
        }
    }
}
