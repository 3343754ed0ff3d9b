//! Detail pages for services, addressed by slug. `sections` holds the page body blocks.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub slug: String,
    pub service_id: Uuid,
    pub hero_title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_description: Option<String>,
    pub hero_button_text: Option<String>,
    pub hero_button_link: Option<String>,
    pub sections: Option<Json>,
    #[sea_orm(column_type = "Text", nullable)]
    pub metas: Option<String>,
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

content_entity!(Uuid, "ServiceDetail", "serviceDetail", index = Index, slug = Slug);

#[derive(Debug, Clone, Deserialize)]
pub struct NewServiceDetail {
    pub slug: String,
    pub service_id: Uuid,
    pub hero_title: String,
    pub hero_description: Option<String>,
    pub hero_button_text: Option<String>,
    pub hero_button_link: Option<String>,
    pub sections: Option<Json>,
    pub metas: Option<String>,
}

impl Draft<Entity> for NewServiceDetail {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("slug", &self.slug)?;
        content::require("hero_title", &self.hero_title)
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(self.slug),
            service_id: Set(self.service_id),
            hero_title: Set(self.hero_title),
            hero_description: Set(self.hero_description),
            hero_button_text: Set(self.hero_button_text),
            hero_button_link: Set(self.hero_button_link),
            sections: Set(self.sections),
            metas: Set(self.metas),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDetailPatch {
    pub slug: Option<String>,
    pub service_id: Option<Uuid>,
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub hero_button_text: Option<String>,
    pub hero_button_link: Option<String>,
    pub sections: Option<Json>,
    pub metas: Option<String>,
}

impl Patch<Entity> for ServiceDetailPatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("slug", self.slug.as_ref())?;
        content::require_if_present("hero_title", self.hero_title.as_ref())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.slug { am.slug = Set(v); }
        if let Some(v) = self.service_id { am.service_id = Set(v); }
        if let Some(v) = self.hero_title { am.hero_title = Set(v); }
        if let Some(v) = self.hero_description { am.hero_description = Set(Some(v)); }
        if let Some(v) = self.hero_button_text { am.hero_button_text = Set(Some(v)); }
        if let Some(v) = self.hero_button_link { am.hero_button_link = Set(Some(v)); }
        if let Some(v) = self.sections { am.sections = Set(Some(v)); }
        if let Some(v) = self.metas { am.metas = Set(Some(v)); }
    }
}
