//! Top-level entries of the site navigation menu.
//!
//! A header owns sub headers, which in turn own sub child headers. The three levels
//! share one patch shape since the update endpoint addresses any of them by id.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity, Draft, Patch};
use crate::errors::ModelError;
use crate::{sub_child_header, sub_header};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "header")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SubHeader,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SubHeader => Entity::has_many(sub_header::Entity).into(),
        }
    }
}

impl Related<sub_header::Entity> for Entity {
    fn to() -> RelationDef { Relation::SubHeader.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "Header", "header");

/// A header with its nested menu, created in one request.
#[derive(Debug, Clone, Deserialize)]
pub struct NewHeader {
    pub title: String,
    pub link: Option<String>,
    #[serde(default, rename = "subHeaders")]
    pub sub_headers: Vec<sub_header::NewSubHeader>,
}

impl NewHeader {
    /// The header row and the sub headers still to be inserted under it.
    pub fn into_rows(self) -> (ActiveModel, Vec<sub_header::NewSubHeader>) {
        let am = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(self.title),
            link: Set(self.link),
            ..Default::default()
        };
        (am, self.sub_headers)
    }
}

impl Draft<Entity> for NewHeader {
    fn validate(&self) -> Result<(), ModelError> {
        content::require("title", &self.title)?;
        self.sub_headers.iter().try_for_each(sub_header::NewSubHeader::validate)
    }

    fn into_active_model(self) -> ActiveModel { self.into_rows().0 }
}

/// `title` / `link` update applied to whichever menu level holds the id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuPatch {
    pub title: Option<String>,
    pub link: Option<String>,
}

impl Patch<Entity> for MenuPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.link { am.link = Set(Some(v)); }
    }
}

impl Patch<sub_header::Entity> for MenuPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut sub_header::ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.link { am.link = Set(Some(v)); }
    }
}

impl Patch<sub_child_header::Entity> for MenuPatch {
    fn validate(&self) -> Result<(), ModelError> { content::require_if_present("title", self.title.as_ref()) }

    fn apply(self, am: &mut sub_child_header::ActiveModel) {
        if let Some(v) = self.title { am.title = Set(v); }
        if let Some(v) = self.link { am.link = Set(Some(v)); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;
    use serde_json::json;

    #[test]
    fn nested_body_uses_menu_keys() {
        let draft: NewHeader = serde_json::from_value(json!({
            "title": "Services",
            "subHeaders": [
                {"title": "Cloud", "link": "/cloud", "subMenuHeaders": [{"title": "AWS"}, {"title": "GCP"}]},
                {"title": "Data"}
            ]
        }))
        .unwrap();
        assert_eq!(draft.sub_headers.len(), 2);
        assert_eq!(draft.sub_headers[0].sub_menu_headers.len(), 2);
        assert!(draft.sub_headers[1].sub_menu_headers.is_empty());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_title_anywhere_in_the_tree_is_rejected() {
        let draft: NewHeader = serde_json::from_value(json!({
            "title": "Services",
            "subHeaders": [{"title": "Cloud", "subMenuHeaders": [{"title": " "}]}]
        }))
        .unwrap();
        assert!(matches!(draft.validate(), Err(ModelError::Validation(_))));
    }

    #[test]
    fn into_rows_splits_off_children() {
        let draft = NewHeader { title: "About".into(), link: Some("/about".into()), sub_headers: Vec::new() };
        let (am, subs) = draft.into_rows();
        assert!(matches!(am.id, ActiveValue::Set(_)));
        assert_eq!(am.link, ActiveValue::Set(Some("/about".to_string())));
        assert!(matches!(am.created_at, ActiveValue::NotSet));
        assert!(subs.is_empty());
    }

    #[test]
    fn menu_patch_rejects_unknown_fields() {
        assert!(serde_json::from_str::<MenuPatch>(r#"{"title":"x","subHeaders":[]}"#).is_err());
        let mut am = <sub_header::ActiveModel as Default>::default();
        <MenuPatch as Patch<sub_header::Entity>>::apply(MenuPatch { link: Some("/new".into()), ..Default::default() }, &mut am);
        assert!(matches!(am.title, ActiveValue::NotSet));
        assert_eq!(am.link, ActiveValue::Set(Some("/new".to_string())));
    }
}
