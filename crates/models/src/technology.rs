//! Technologies shown on sub-service pages.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technology")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sub_service_id: Option<Uuid>,
    pub title: String,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "Technology", "technology", index = Index, search = Title);

#[derive(Debug, Clone, Deserialize)]
pub struct NewTechnology {
    pub title: String,
    pub sub_service_id: Option<Uuid>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

impl Draft<Entity> for NewTechnology {
    fn validate(&self) -> Result<(), ModelError> { content::require("title", &self.title) }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            sub_service_id: Set(self.sub_service_id),
            title: Set(self.title),
            image: Set(self.image),
            alt: Set(self.alt),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnologyPatch {
    pub title: Option<String>,
    pub sub_service_id: Option<Uuid>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

impl Patch<Entity> for TechnologyPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.sub_service_id { am.sub_service_id = Set(Some(v)); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
        if let Some(v) = self.alt { am.alt = Set(Some(v)); }
    }
}
