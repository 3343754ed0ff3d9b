use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::{service_detail, service_faq, sub_service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
    pub index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SubService,
    ServiceFaq,
    ServiceDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SubService => Entity::has_many(sub_service::Entity).into(),
            Relation::ServiceFaq => Entity::has_many(service_faq::Entity).into(),
            Relation::ServiceDetail => Entity::has_many(service_detail::Entity).into(),
        }
    }
}

impl Related<sub_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::SubService.def() }
}

impl Related<service_faq::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceFaq.def() }
}

impl Related<service_detail::Entity> for Entity {
    fn to() -> RelationDef { Relation::ServiceDetail.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "Service", "service", index = Index, search = Title);

#[derive(Debug, Clone, Deserialize)]
pub struct NewService {
    pub title: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
}

impl Draft<Entity> for NewService {
    fn validate(&self) -> Result<(), ModelError> { content::require("title", &self.title) }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            short_description: Set(self.short_description),
            long_description: Set(self.long_description),
            button_link: Set(self.button_link),
            image: Set(self.image),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
}

impl Patch<Entity> for ServicePatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.short_description { am.short_description = Set(Some(v)); }
        if let Some(v) = self.long_description { am.long_description = Set(Some(v)); }
        if let Some(v) = self.button_link { am.button_link = Set(Some(v)); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
    }
}
