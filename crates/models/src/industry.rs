//! Industries served, listed on the landing page and referenced by case studies.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::case_study;
use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "industry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub icon: Option<String>,
    pub icon_alt: Option<String>,
    pub index: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    CaseStudy,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CaseStudy => Entity::has_many(case_study::Entity).into(),
        }
    }
}

impl Related<case_study::Entity> for Entity {
    fn to() -> RelationDef { Relation::CaseStudy.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "Industry", "industry", index = Index, search = Title);

#[derive(Debug, Clone, Deserialize)]
pub struct NewIndustry {
    pub title: String,
    pub description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub icon: Option<String>,
    pub icon_alt: Option<String>,
}

impl Draft<Entity> for NewIndustry {
    fn validate(&self) -> Result<(), ModelError> { content::require("title", &self.title) }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            description: Set(self.description),
            button_link: Set(self.button_link),
            image: Set(self.image),
            alt: Set(self.alt),
            icon: Set(self.icon),
            icon_alt: Set(self.icon_alt),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub icon: Option<String>,
    pub icon_alt: Option<String>,
}

impl Patch<Entity> for IndustryPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        if let Some(v) = self.button_link { am.button_link = Set(Some(v)); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
        if let Some(v) = self.alt { am.alt = Set(Some(v)); }
        if let Some(v) = self.icon { am.icon = Set(Some(v)); }
        if let Some(v) = self.icon_alt { am.icon_alt = Set(Some(v)); }
    }
}
