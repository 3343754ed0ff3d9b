//! Landing pages for industries, addressed by slug.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::industry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "industry_page")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub slug: String,
    pub industry_id: Uuid,
    pub hero_title: String,
    #[sea_orm(column_type = "Text")]
    pub hero_description: String,
    pub hero_image: Option<String>,
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
    Industry,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Industry => Entity::belongs_to(industry::Entity)
                .from(Column::IndustryId)
                .to(industry::Column::Id)
                .into(),
        }
    }
}

impl Related<industry::Entity> for Entity {
    fn to() -> RelationDef { Relation::Industry.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "IndustryPage", "industryPage", index = Index, slug = Slug);

#[derive(Debug, Clone, Deserialize)]
pub struct NewIndustryPage {
    pub slug: String,
    pub industry_id: Uuid,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_image: Option<String>,
    pub sections: Option<Json>,
    pub metas: Option<String>,
}

impl Draft<Entity> for NewIndustryPage {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("slug", &self.slug)?;
        content::require("hero_title", &self.hero_title)?;
        content::require("hero_description", &self.hero_description)
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            slug: Set(self.slug),
            industry_id: Set(self.industry_id),
            hero_title: Set(self.hero_title),
            hero_description: Set(self.hero_description),
            hero_image: Set(self.hero_image),
            sections: Set(self.sections),
            metas: Set(self.metas),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustryPagePatch {
    pub slug: Option<String>,
    pub industry_id: Option<Uuid>,
    pub hero_title: Option<String>,
    pub hero_description: Option<String>,
    pub hero_image: Option<String>,
    pub sections: Option<Json>,
    pub metas: Option<String>,
}

impl Patch<Entity> for IndustryPagePatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("slug", self.slug.as_ref())?;
        content::require_if_present("hero_title", self.hero_title.as_ref())?;
        content::require_if_present("hero_description", self.hero_description.as_ref())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.slug { am.slug = Set(v); }
        if let Some(v) = self.industry_id { am.industry_id = Set(v); }
        if let Some(v) = self.hero_title { am.hero_title = Set(v); }
        if let Some(v) = self.hero_description { am.hero_description = Set(v); }
        if let Some(v) = self.hero_image { am.hero_image = Set(Some(v)); }
        if let Some(v) = self.sections { am.sections = Set(Some(v)); }
        if let Some(v) = self.metas { am.metas = Set(Some(v)); }
    }
}
