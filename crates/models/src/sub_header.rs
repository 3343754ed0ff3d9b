//! Second level of the navigation menu, nested under a header.
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::{self, content_entity};
use crate::errors::ModelError;
use crate::{header, sub_child_header};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_header")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub header_id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Header,
    SubChildHeader,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Header => Entity::belongs_to(header::Entity)
                .from(Column::HeaderId)
                .to(header::Column::Id)
                .into(),
            Relation::SubChildHeader => Entity::has_many(sub_child_header::Entity).into(),
        }
    }
}

impl Related<header::Entity> for Entity {
    fn to() -> RelationDef { Relation::Header.def() }
}

impl Related<sub_child_header::Entity> for Entity {
    fn to() -> RelationDef { Relation::SubChildHeader.def() }
}

impl ActiveModelBehavior for ActiveModel {}

content_entity!(Uuid, "SubHeader", "header");

#[derive(Debug, Clone, Deserialize)]
pub struct NewSubHeader {
    pub title: String,
    pub link: Option<String>,
    #[serde(default, rename = "subMenuHeaders")]
    pub sub_menu_headers: Vec<sub_child_header::NewSubChildHeader>,
}

impl NewSubHeader {
    pub fn validate(&self) -> Result<(), ModelError> {
        content::require("title", &self.title)?;
        self.sub_menu_headers.iter().try_for_each(sub_child_header::NewSubChildHeader::validate)
    }

    pub fn into_rows(self, header_id: Uuid) -> (ActiveModel, Vec<sub_child_header::NewSubChildHeader>) {
        let am = ActiveModel {
            id: Set(Uuid::new_v4()),
            header_id: Set(header_id),
            title: Set(self.title),
            link: Set(self.link),
            ..Default::default()
        };
        (am, self.sub_menu_headers)
    }
}
