//! The home page hero banner. At most one non-deleted banner exists.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub button_link: Option<String>,
    pub status: bool,
    pub image: Option<String>,
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

content_entity!(Uuid, "Banner", "banner");

fn default_status() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct NewBanner {
    pub title: String,
    pub description: Option<String>,
    pub button_link: Option<String>,
    #[serde(default = "default_status")]
    pub status: bool,
    pub image: Option<String>,
}

impl Draft<Entity> for NewBanner {
    fn validate(&self) -> Result<(), ModelError> { content::require("title", &self.title) }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            description: Set(self.description),
            button_link: Set(self.button_link),
            status: Set(self.status),
            image: Set(self.image),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_link: Option<String>,
    pub status: Option<bool>,
    pub image: Option<String>,
}

impl Patch<Entity> for BannerPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        if let Some(v) = self.button_link { am.button_link = Set(Some(v)); }
        if let Some(v) = self.status { am.status = Set(v); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
    }
}
