//! The site banner is a singleton: at most one non-deleted row.
use sea_orm::{ConnectionTrait, PaginatorTrait, QueryOrder};
use tracing::warn;

use models::banner::{self, NewBanner};

use crate::content;
use crate::errors::ServiceError;

pub async fn create<C: ConnectionTrait>(db: &C, draft: NewBanner) -> Result<banner::Model, ServiceError> {
    let existing = content::live::<banner::Entity>().count(db).await?;
    if existing > 0 {
        warn!(existing, "banner_already_exists");
        return Err(ServiceError::Conflict("A banner already exists. Only one banner is allowed.".into()));
    }
    content::create::<banner::Entity, _, _>(db, draft).await
}

/// The current banner, or NotFound when none has been created.
pub async fn current<C: ConnectionTrait>(db: &C) -> Result<banner::Model, ServiceError> {
    content::live::<banner::Entity>()
        .order_by_asc(banner::Column::CreatedAt)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound("No banner found.".into()))
}

/// Banners with `status = true`.
pub async fn active<C: ConnectionTrait>(db: &C) -> Result<Vec<banner::Model>, ServiceError> {
    content::list_where::<banner::Entity, _, _>(db, banner::Column::Status, true).await
}
