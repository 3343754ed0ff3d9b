//! Sub-services nested under a service. Not manually ordered.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: Option<String>,
    pub button_link: Option<String>,
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

content_entity!(Uuid, "SubService", "subService", search = Title);

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubService {
    pub service_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub button_link: Option<String>,
}

impl Draft<Entity> for NewSubService {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("title", &self.title)?;
        content::require("description", &self.description)
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(self.service_id),
            title: Set(self.title),
            description: Set(self.description),
            image: Set(self.image),
            button_link: Set(self.button_link),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubServicePatch {
    pub service_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub button_link: Option<String>,
}

impl Patch<Entity> for SubServicePatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("title", self.title.as_ref())?;
        content::require_if_present("description", self.description.as_ref())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.service_id { am.service_id = Set(v); }
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.description { am.description = Set(v); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
        if let Some(v) = self.button_link { am.button_link = Set(Some(v)); }
    }
}
