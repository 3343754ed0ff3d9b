//! Fields of expertise, each with its own landing page addressed by slug.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "field")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
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

content_entity!(Uuid, "Field", "field", index = Index, search = Title, slug = Slug);

#[derive(Debug, Clone, Deserialize)]
pub struct NewField {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
}

impl Draft<Entity> for NewField {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("slug", &self.slug)?;
        content::require("title", &self.title)
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(self.slug),
            title: Set(self.title),
            description: Set(self.description),
            button_text: Set(self.button_text),
            button_link: Set(self.button_link),
            image: Set(self.image),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image: Option<String>,
}

impl Patch<Entity> for FieldPatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("slug", self.slug.as_ref())?;
        content::require_if_present("title", self.title.as_ref())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.slug { am.slug = Set(v); }
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.description { am.description = Set(Some(v)); }
        if let Some(v) = self.button_text { am.button_text = Set(Some(v)); }
        if let Some(v) = self.button_link { am.button_link = Set(Some(v)); }
        if let Some(v) = self.image { am.image = Set(Some(v)); }
    }
}
