//! Generic CRUD over content tables.
//!
//! Every query here ignores soft-deleted rows. Lists come back in display order:
//! `index` ascending for orderable entities, then `created_at`, then primary key.

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, Select, Value,
};
use tracing::{info, instrument};

use common::pagination::ListQuery;
use common::types::Listing;
use models::content::{ContentEntity, Draft, Patch};

use crate::errors::ServiceError;
use crate::ordering;

/// Non-deleted rows of `E`.
pub fn live<E: ContentEntity>() -> Select<E> {
    E::find().filter(E::deleted_at_column().is_null())
}

/// Apply the display order of `E` to a query.
pub fn in_display_order<E: ContentEntity>(select: Select<E>) -> Select<E> {
    let select = match E::order_column() {
        Some(col) => select.order_by_asc(col),
        None => select,
    };
    select.order_by_asc(E::created_at_column()).order_by_asc(E::id_column())
}

/// Validate `draft`, stamp timestamps, assign the next index for orderable entities and insert.
#[instrument(skip_all, fields(entity = E::LABEL))]
pub async fn create<E, D, C>(db: &C, draft: D) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    D: Draft<E>,
    C: ConnectionTrait,
{
    draft.validate()?;
    insert::<E, C>(db, draft.into_active_model()).await
}

/// Insert an already validated row, filling in timestamps and, for orderable
/// entities, the next display index.
pub async fn insert<E, C>(db: &C, mut am: E::ActiveModel) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let now: DateTimeWithTimeZone = Utc::now().into();
    am.set(E::created_at_column(), now.into());
    am.set(E::updated_at_column(), now.into());
    if let Some(col) = E::order_column() {
        let index = ordering::next_index_in::<E, C>(db, col).await?;
        am.set(col, index.into());
    }
    let created = am.insert(db).await?;
    info!(entity = E::LABEL, id = %E::id_of(&created), "content_created");
    Ok(created)
}

pub async fn find<E, C>(db: &C, id: &E::Id) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    live::<E>()
        .filter(E::id_column().eq(id.clone()))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(E::LABEL))
}

pub async fn find_by_slug<E, C>(db: &C, slug: &str) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let Some(col) = E::slug_column() else {
        return Err(ServiceError::BadRequest(format!("{} has no slug", E::LABEL)));
    };
    live::<E>()
        .filter(col.eq(slug))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found(E::LABEL))
}

/// The whole collection, or one page of it with page metadata.
pub async fn list<E, C>(db: &C, query: ListQuery) -> Result<Listing<E::Model>, ServiceError>
where
    E: ContentEntity,
    E::Model: Sync,
    C: ConnectionTrait,
{
    match query {
        ListQuery::All => Ok(Listing::all(all::<E, C>(db).await?)),
        ListQuery::Page(p) => {
            let (page_idx, per_page) = p.normalize();
            let paginator = in_display_order(live::<E>()).paginate(db, per_page);
            let total = paginator.num_items().await?;
            // Pages past the end are empty without issuing an out-of-range OFFSET.
            let items = match p.offset() {
                Some(offset) if offset < total => paginator.fetch_page(page_idx).await?,
                _ => Vec::new(),
            };
            Ok(Listing { items, page_info: Some(p.page_info(total)) })
        }
    }
}

/// Every non-deleted row in display order.
pub async fn all<E, C>(db: &C) -> Result<Vec<E::Model>, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    Ok(in_display_order(live::<E>()).all(db).await?)
}

/// Non-deleted rows whose `col` equals `value`, in display order.
pub async fn list_where<E, C, V>(db: &C, col: E::Column, value: V) -> Result<Vec<E::Model>, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
    V: Into<Value>,
{
    Ok(in_display_order(live::<E>().filter(col.eq(value))).all(db).await?)
}

/// Substring match on the entity's search column. An absent or empty query is rejected.
pub async fn search<E, C>(db: &C, query: Option<&str>) -> Result<Vec<E::Model>, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let q = match query {
        Some(q) if !q.is_empty() => q,
        _ => return Err(ServiceError::BadRequest("Search query is required".into())),
    };
    let Some(col) = E::search_column() else {
        return Err(ServiceError::BadRequest(format!("{} does not support search", E::LABEL)));
    };
    Ok(in_display_order(live::<E>().filter(col.contains(q))).all(db).await?)
}

#[instrument(skip_all, fields(entity = E::LABEL, id = %id))]
pub async fn update<E, P, C>(db: &C, id: &E::Id, patch: P) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    P: Patch<E>,
    C: ConnectionTrait,
{
    patch.validate()?;
    let existing = find::<E, C>(db, id).await?;
    let mut am = existing.into_active_model();
    patch.apply(&mut am);
    let now: DateTimeWithTimeZone = Utc::now().into();
    am.set(E::updated_at_column(), now.into());
    let updated = am.update(db).await?;
    info!(entity = E::LABEL, id = %id, "content_updated");
    Ok(updated)
}

/// Mark the row deleted and return it as stored.
#[instrument(skip_all, fields(entity = E::LABEL, id = %id))]
pub async fn soft_delete<E, C>(db: &C, id: &E::Id) -> Result<E::Model, ServiceError>
where
    E: ContentEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    let existing = find::<E, C>(db, id).await?;
    let mut am = existing.into_active_model();
    let now: DateTimeWithTimeZone = Utc::now().into();
    am.set(E::deleted_at_column(), Value::from(Some(now)));
    am.set(E::updated_at_column(), now.into());
    let deleted = am.update(db).await?;
    info!(entity = E::LABEL, id = %id, "content_soft_deleted");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use common::pagination::Pagination;
    use models::{blog, branch, service as svc, step, sub_service, technology};
    use uuid::Uuid;

    fn tech(title: &str) -> technology::NewTechnology {
        technology::NewTechnology { title: title.into(), sub_service_id: None, image: None, alt: None }
    }

    #[tokio::test]
    async fn create_get_update_delete() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create::<technology::Entity, _, _>(&db, tech("Rust")).await?;
        assert_eq!(created.index, 1);
        assert!(created.deleted_at.is_none());

        let found = find::<technology::Entity, _>(&db, &created.id).await?;
        assert_eq!(found.title, "Rust");

        let patch = technology::TechnologyPatch { title: Some("Rust 2024".into()), ..Default::default() };
        let updated = update::<technology::Entity, _, _>(&db, &created.id, patch).await?;
        assert_eq!(updated.title, "Rust 2024");
        assert_eq!(updated.index, created.index);
        assert!(updated.updated_at >= created.updated_at);

        let deleted = soft_delete::<technology::Entity, _>(&db, &created.id).await?;
        assert!(deleted.deleted_at.is_some());
        let gone = find::<technology::Entity, _>(&db, &created.id).await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create::<technology::Entity, _, _>(&db, tech("   ")).await;
        assert!(matches!(err, Err(ServiceError::Model(_))));
        let listing = list::<technology::Entity, _>(&db, ListQuery::All).await?;
        assert!(listing.items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update::<technology::Entity, _, _>(&db, &Uuid::new_v4(), technology::TechnologyPatch::default()).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn pagination_counts_pages() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..7 {
            create::<technology::Entity, _, _>(&db, tech(&format!("t{i}"))).await?;
        }

        let page = list::<technology::Entity, _>(&db, ListQuery::Page(Pagination { page: 3, per_page: 3 })).await?;
        let info = page.page_info.expect("paged");
        assert_eq!(info.total_items, 7);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.current_page, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "t6");

        let beyond = list::<technology::Entity, _>(&db, ListQuery::Page(Pagination { page: 9, per_page: 3 })).await?;
        assert!(beyond.items.is_empty());

        let first = list::<technology::Entity, _>(&db, ListQuery::default()).await?;
        assert_eq!(first.items.len(), 7);
        assert_eq!(first.page_info.map(|p| p.total_pages), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn huge_page_and_limit_do_not_overflow() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..3 {
            create::<technology::Entity, _, _>(&db, tech(&format!("t{i}"))).await?;
        }

        let far = list::<technology::Entity, _>(&db, ListQuery::from_raw(Some("9223372036854775807"), Some("10"), None)).await?;
        assert!(far.items.is_empty());
        let info = far.page_info.expect("paged");
        assert_eq!(info.total_items, 3);
        assert_eq!(info.current_page, 9223372036854775807);

        let wide = list::<technology::Entity, _>(&db, ListQuery::from_raw(Some("1"), Some("9223372036854775807"), None)).await?;
        assert_eq!(wide.items.len(), 3);
        assert_eq!(wide.page_info.map(|p| p.total_pages), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn equal_index_falls_back_to_creation_time_then_id() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut created = Vec::new();
        for t in ["first", "second", "third"] {
            created.push(create::<technology::Entity, _, _>(&db, tech(t)).await?);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        technology::Entity::update_many()
            .col_expr(technology::Column::Index, sea_orm::sea_query::Expr::value(7))
            .exec(&db)
            .await?;

        let titles: Vec<_> = all::<technology::Entity, _>(&db).await?.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);

        // Identical index and created_at leave only the primary key to decide.
        let stamp = created[0].created_at;
        technology::Entity::update_many()
            .col_expr(technology::Column::CreatedAt, sea_orm::sea_query::Expr::value(stamp))
            .exec(&db)
            .await?;
        let mut expected: Vec<_> = created.iter().map(|t| t.id).collect();
        expected.sort();
        let ids: Vec<_> = all::<technology::Entity, _>(&db).await?.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, expected);

        let paged = list::<technology::Entity, _>(&db, ListQuery::Page(Pagination { page: 1, per_page: 2 })).await?;
        assert_eq!(paged.items.iter().map(|t| t.id).collect::<Vec<_>>(), expected[..2].to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn soft_deleted_rows_are_hidden_from_lists_and_max_index() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create::<technology::Entity, _, _>(&db, tech("a")).await?;
        let b = create::<technology::Entity, _, _>(&db, tech("b")).await?;
        soft_delete::<technology::Entity, _>(&db, &b.id).await?;

        let all = all::<technology::Entity, _>(&db).await?;
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id]);

        let c = create::<technology::Entity, _, _>(&db, tech("c")).await?;
        assert_eq!(c.index, 2);
        Ok(())
    }

    #[tokio::test]
    async fn search_requires_query_and_matches_substring() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create::<technology::Entity, _, _>(&db, tech("PostgreSQL")).await?;
        create::<technology::Entity, _, _>(&db, tech("Redis")).await?;

        assert!(matches!(search::<technology::Entity, _>(&db, None).await, Err(ServiceError::BadRequest(_))));
        assert!(matches!(search::<technology::Entity, _>(&db, Some("")).await, Err(ServiceError::BadRequest(_))));

        let hits = search::<technology::Entity, _>(&db, Some("SQL")).await?;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "PostgreSQL");
        Ok(())
    }

    #[tokio::test]
    async fn unordered_entities_list_by_creation_time() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for t in ["one", "two", "three"] {
            create::<step::Entity, _, _>(&db, step::NewStep { title: t.into(), description: None, image: None }).await?;
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        let steps = all::<step::Entity, _>(&db).await?;
        let titles: Vec<_> = steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);

        let err = search::<step::Entity, _>(&db, Some("one")).await;
        assert!(matches!(err, Err(ServiceError::BadRequest(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_where_filters_by_parent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let parent = create::<svc::Entity, _, _>(
            &db,
            svc::NewService { title: "Cloud".into(), short_description: None, long_description: None, button_link: None, image: None },
        )
        .await?;
        let child = sub_service::NewSubService {
            service_id: parent.id,
            title: "Migration".into(),
            description: "Lift and shift".into(),
            image: None,
            button_link: None,
        };
        create::<sub_service::Entity, _, _>(&db, child).await?;

        let rows = list_where::<sub_service::Entity, _, _>(&db, sub_service::Column::ServiceId, parent.id).await?;
        assert_eq!(rows.len(), 1);
        let none = list_where::<sub_service::Entity, _, _>(&db, sub_service::Column::ServiceId, Uuid::new_v4()).await?;
        assert!(none.is_empty());

        let b = create::<branch::Entity, _, _>(
            &db,
            branch::NewBranch {
                title: "Pune".into(),
                address: None,
                city: Some("Pune".into()),
                state: None,
                zip_code: Some(411001),
                country: None,
                page_id: Some("contact".into()),
            },
        )
        .await?;
        let by_page = list_where::<branch::Entity, _, _>(&db, branch::Column::PageId, "contact").await?;
        assert_eq!(by_page.iter().map(|r| r.id).collect::<Vec<_>>(), vec![b.id]);
        Ok(())
    }

    #[tokio::test]
    async fn blog_search_ignores_deleted_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let draft = |t: &str| blog::NewBlog { title: t.into(), description: None, blog_link: None, image: None, alt: None };
        let keep = create::<blog::Entity, _, _>(&db, draft("Async Rust")).await?;
        let gone = create::<blog::Entity, _, _>(&db, draft("Async Python")).await?;
        soft_delete::<blog::Entity, _>(&db, &gone.id).await?;
        let hits = search::<blog::Entity, _>(&db, Some("Async")).await?;
        assert_eq!(hits.iter().map(|b| b.id).collect::<Vec<_>>(), vec![keep.id]);
        Ok(())
    }
}
