//! Traits shared by every content table.
//!
//! A content table has a primary key, `created_at` / `updated_at` timestamps and a
//! nullable `deleted_at` marking soft deletion. Tables that support manual display
//! ordering additionally carry an integer `index` column and implement [`Orderable`].

use std::fmt::{Debug, Display};

use sea_orm::{EntityTrait, Value};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

pub trait ContentEntity: EntityTrait {
    /// Primary key as seen on the wire (path segments and swap bodies).
    type Id: Into<Value> + Clone + PartialEq + Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Human readable name used in response messages, e.g. `"Technology"`.
    const LABEL: &'static str;
    /// Route segment under `/api/v1`, e.g. `"technology"`.
    const ROUTE: &'static str;

    fn id_column() -> Self::Column;
    fn id_of(model: &Self::Model) -> Self::Id;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;

    /// Manual display order column; `None` for entities listed by creation time.
    fn order_column() -> Option<Self::Column> { None }

    /// Column matched by the substring search endpoint, if the entity has one.
    fn search_column() -> Option<Self::Column> { None }

    /// Column holding a public slug, if the entity is addressable by slug.
    fn slug_column() -> Option<Self::Column> { None }
}

/// A content table ordered by a manual `index` column.
pub trait Orderable: ContentEntity {
    fn index_column() -> Self::Column;
    fn index_of(model: &Self::Model) -> i32;
}

/// Create payload for an entity.
pub trait Draft<E: ContentEntity>: DeserializeOwned + Send + 'static {
    fn validate(&self) -> Result<(), ModelError>;

    /// Primary key and domain columns. Timestamps and `index` are filled in by the caller.
    fn into_active_model(self) -> E::ActiveModel;
}

/// Partial update payload for an entity. Never carries `index`.
pub trait Patch<E: ContentEntity>: DeserializeOwned + Send + 'static {
    fn validate(&self) -> Result<(), ModelError> { Ok(()) }

    fn apply(self, am: &mut E::ActiveModel);
}

/// Reject an empty or whitespace-only required string.
pub fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::required(field));
    }
    Ok(())
}

/// Like [`require`], for a field that may be absent from a patch.
pub fn require_if_present(field: &str, value: Option<&String>) -> Result<(), ModelError> {
    match value {
        Some(v) => require(field, v),
        None => Ok(()),
    }
}

/// Implements [`ContentEntity`] (and [`Orderable`] when `index` is given) for the
/// `Entity` of the invoking module, whose columns follow the shared `Id` /
/// `CreatedAt` / `UpdatedAt` / `DeletedAt` naming.
macro_rules! content_entity {
    ($id:ty, $label:literal, $route:literal $(, index = $index:ident)? $(, search = $search:ident)? $(, slug = $slug:ident)?) => {
        impl $crate::content::ContentEntity for Entity {
            type Id = $id;
            const LABEL: &'static str = $label;
            const ROUTE: &'static str = $route;

            fn id_column() -> Column { Column::Id }
            fn id_of(model: &Model) -> $id { model.id.clone() }
            fn created_at_column() -> Column { Column::CreatedAt }
            fn updated_at_column() -> Column { Column::UpdatedAt }
            fn deleted_at_column() -> Column { Column::DeletedAt }
            $(fn order_column() -> Option<Column> { Some(Column::$index) })?
            $(fn search_column() -> Option<Column> { Some(Column::$search) })?
            $(fn slug_column() -> Option<Column> { Some(Column::$slug) })?
        }

        $(
            impl $crate::content::Orderable for Entity {
                fn index_column() -> Column { Column::$index }
                fn index_of(model: &Model) -> i32 { model.index }
            }
        )?
    };
}

pub(crate) use content_entity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert!(require("title", "  ").is_err());
        assert!(require("title", "Rust").is_ok());
    }

    #[test]
    fn require_if_present_skips_absent_fields() {
        assert!(require_if_present("title", None).is_ok());
        assert!(require_if_present("title", Some(&String::new())).is_err());
    }
}
