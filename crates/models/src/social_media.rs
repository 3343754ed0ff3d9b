//! Social links in the site footer. Inactive links stay ordered but are hidden from the public list.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "social_media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub link: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub active: bool,
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

content_entity!(Uuid, "SocialMedia", "socialMedia", index = Index, search = Title);

fn default_active() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct NewSocialMedia {
    pub link: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Draft<Entity> for NewSocialMedia {
    fn validate(&self) -> Result<(), ModelError> { content::require("link", &self.link) }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            link: Set(self.link),
            title: Set(self.title),
            icon: Set(self.icon),
            active: Set(self.active),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialMediaPatch {
    pub link: Option<String>,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
}

impl Patch<Entity> for SocialMediaPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("link", self.link.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.link { am.link = Set(v); }
        if let Some(v) = self.title { am.title = Set(Some(v)); }
        if let Some(v) = self.icon { am.icon = Set(Some(v)); }
        if let Some(v) = self.active { am.active = Set(v); }
    }
}
