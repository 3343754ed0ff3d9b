//! Office locations. `page_id` ties a branch to the page it is displayed on.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "branch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub page_id: Option<String>,
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

content_entity!(Uuid, "Branch", "branch", index = Index, search = Title);

#[derive(Debug, Clone, Deserialize)]
pub struct NewBranch {
    pub title: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub page_id: Option<String>,
}

impl Draft<Entity> for NewBranch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("title", &self.title)?;
        if matches!(self.zip_code, Some(z) if z < 0) {
            return Err(ModelError::Validation("zip_code must not be negative".into()));
        }
        Ok(())
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            address: Set(self.address),
            city: Set(self.city),
            state: Set(self.state),
            zip_code: Set(self.zip_code),
            country: Set(self.country),
            page_id: Set(self.page_id),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BranchPatch {
    pub title: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
    pub country: Option<String>,
    pub page_id: Option<String>,
}

impl Patch<Entity> for BranchPatch {
    fn validate(&self) -> Result<(), ModelError> {
        content::require_if_present("title", self.title.as_ref())?;
        if matches!(self.zip_code, Some(z) if z < 0) {
            return Err(ModelError::Validation("zip_code must not be negative".into()));
        }
        Ok(())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.address { am.address = Set(Some(v)); }
        if let Some(v) = self.city { am.city = Set(Some(v)); }
        if let Some(v) = self.state { am.state = Set(Some(v)); }
        if let Some(v) = self.zip_code { am.zip_code = Set(Some(v)); }
        if let Some(v) = self.country { am.country = Set(Some(v)); }
        if let Some(v) = self.page_id { am.page_id = Set(Some(v)); }
    }
}
