//! Case studies. Keyed by an auto-increment integer; the page body is stored as JSON documents.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::industry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "case_study")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub slug: String,
    pub industry_id: Option<Uuid>,
    pub summary: Json,
    pub challenges: Option<Json>,
    pub impact: Option<Json>,
    pub system_phase: Json,
    pub additional_information: Option<Json>,
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

content_entity!(i32, "CaseStudy", "caseStudy", index = Index, search = Slug, slug = Slug);

#[derive(Debug, Clone, Deserialize)]
pub struct NewCaseStudy {
    pub slug: String,
    pub industry_id: Option<Uuid>,
    pub summary: Json,
    pub challenges: Option<Json>,
    pub impact: Option<Json>,
    pub system_phase: Json,
    pub additional_information: Option<Json>,
    pub metas: Option<String>,
}

impl Draft<Entity> for NewCaseStudy {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("slug", &self.slug)?;
        if self.summary.is_null() {
            return Err(ModelError::required("summary"));
        }
        if self.system_phase.is_null() {
            return Err(ModelError::required("system_phase"));
        }
        Ok(())
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            slug: Set(self.slug),
            industry_id: Set(self.industry_id),
            summary: Set(self.summary),
            challenges: Set(self.challenges),
            impact: Set(self.impact),
            system_phase: Set(self.system_phase),
            additional_information: Set(self.additional_information),
            metas: Set(self.metas),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseStudyPatch {
    pub slug: Option<String>,
    pub industry_id: Option<Uuid>,
    pub summary: Option<Json>,
    pub challenges: Option<Json>,
    pub impact: Option<Json>,
    pub system_phase: Option<Json>,
    pub additional_information: Option<Json>,
    pub metas: Option<String>,
}

impl Patch<Entity> for CaseStudyPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("slug", self.slug.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.slug { am.slug = Set(v); }
        if let Some(v) = self.industry_id { am.industry_id = Set(Some(v)); }
        if let Some(v) = self.summary { am.summary = Set(v); }
        if let Some(v) = self.challenges { am.challenges = Set(Some(v)); }
        if let Some(v) = self.impact { am.impact = Set(Some(v)); }
        if let Some(v) = self.system_phase { am.system_phase = Set(v); }
        if let Some(v) = self.additional_information { am.additional_information = Set(Some(v)); }
        if let Some(v) = self.metas { am.metas = Set(Some(v)); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;
    use serde_json::json;

    #[test]
    fn id_is_left_to_the_database() {
        let d = NewCaseStudy {
            slug: "fleet-tracking".into(),
            industry_id: None,
            summary: json!({"heading": "Fleet"}),
            challenges: None,
            impact: None,
            system_phase: json!([]),
            additional_information: None,
            metas: None,
        };
        assert!(d.validate().is_ok());
        let am = <NewCaseStudy as Draft<Entity>>::into_active_model(d);
        assert!(matches!(am.id, ActiveValue::NotSet));
    }

    #[test]
    fn missing_system_phase_fails_to_parse() {
        let r = serde_json::from_str::<NewCaseStudy>(r#"{"slug":"x","summary":{}}"#);
        assert!(r.is_err());
    }
}
