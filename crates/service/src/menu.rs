//! Navigation menu: headers, the sub headers under them and the sub child headers
//! under those.
//!
//! Update and delete take a bare id and look it up level by level, headers first.
//! Deleting a row soft-deletes everything nested below it in the same transaction.

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone,
    sea_query::{Expr, SimpleExpr},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, LoaderTrait, PaginatorTrait,
    QueryFilter, QuerySelect, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::content::{ContentEntity, Draft};
use models::header::{MenuPatch, NewHeader};
use models::{header, sub_child_header, sub_header};

use crate::content;
use crate::errors::ServiceError;

/// A header with its sub headers, each carrying its own child entries.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderTree {
    #[serde(flatten)]
    pub header: header::Model,
    pub sub_headers: Vec<SubHeaderTree>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubHeaderTree {
    #[serde(flatten)]
    pub sub_header: sub_header::Model,
    pub menu_headers: Vec<sub_child_header::Model>,
}

/// A single menu row together with the level it was found at.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum MenuItem {
    Header(header::Model),
    SubHeader(sub_header::Model),
    SubChildHeader(sub_child_header::Model),
}

/// Insert a header and its whole nested menu atomically.
#[instrument(skip_all)]
pub async fn create(db: &DatabaseConnection, draft: NewHeader) -> Result<HeaderTree, ServiceError> {
    draft.validate()?;
    let txn = db.begin().await?;
    match insert_tree(&txn, draft).await {
        Ok(tree) => {
            txn.commit().await?;
            info!(id = %tree.header.id, sub_headers = tree.sub_headers.len(), "menu_created");
            Ok(tree)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "menu_rollback_failed");
            }
            Err(e)
        }
    }
}

async fn insert_tree(txn: &DatabaseTransaction, draft: NewHeader) -> Result<HeaderTree, ServiceError> {
    let (am, subs) = draft.into_rows();
    let header = content::insert::<header::Entity, _>(txn, am).await?;
    let mut sub_headers = Vec::with_capacity(subs.len());
    for sub in subs {
        let (am, children) = sub.into_rows(header.id);
        let sub_header = content::insert::<sub_header::Entity, _>(txn, am).await?;
        let mut menu_headers = Vec::with_capacity(children.len());
        for child in children {
            let am = child.into_active_model(sub_header.id);
            menu_headers.push(content::insert::<sub_child_header::Entity, _>(txn, am).await?);
        }
        sub_headers.push(SubHeaderTree { sub_header, menu_headers });
    }
    Ok(HeaderTree { header, sub_headers })
}

/// Every live header with its nested menu, each level by creation time.
pub async fn all<C: ConnectionTrait>(db: &C) -> Result<Vec<HeaderTree>, ServiceError> {
    let headers = content::all::<header::Entity, _>(db).await?;
    trees(db, headers).await
}

pub async fn find<C: ConnectionTrait>(db: &C, id: &Uuid) -> Result<HeaderTree, ServiceError> {
    let header = content::find::<header::Entity, _>(db, id).await?;
    trees(db, vec![header]).await?.pop().ok_or_else(|| ServiceError::not_found(header::Entity::LABEL))
}

async fn trees<C: ConnectionTrait>(db: &C, headers: Vec<header::Model>) -> Result<Vec<HeaderTree>, ServiceError> {
    let subs = headers
        .load_many(content::in_display_order(content::live::<sub_header::Entity>()), db)
        .await?;
    let flat: Vec<sub_header::Model> = subs.iter().flatten().cloned().collect();
    let mut children = flat
        .load_many(content::in_display_order(content::live::<sub_child_header::Entity>()), db)
        .await?
        .into_iter();

    let mut out = Vec::with_capacity(headers.len());
    for (header, subs) in headers.into_iter().zip(subs) {
        let mut sub_headers = Vec::with_capacity(subs.len());
        for sub_header in subs {
            let menu_headers = children.next().unwrap_or_default();
            sub_headers.push(SubHeaderTree { sub_header, menu_headers });
        }
        out.push(HeaderTree { header, sub_headers });
    }
    Ok(out)
}

/// Apply `patch` to the live menu row with this id, whatever its level.
#[instrument(skip_all, fields(id = %id))]
pub async fn update<C: ConnectionTrait>(db: &C, id: &Uuid, patch: MenuPatch) -> Result<MenuItem, ServiceError> {
    match content::update::<header::Entity, _, _>(db, id, patch.clone()).await {
        Err(ServiceError::NotFound(_)) => {}
        other => return other.map(MenuItem::Header),
    }
    match content::update::<sub_header::Entity, _, _>(db, id, patch.clone()).await {
        Err(ServiceError::NotFound(_)) => {}
        other => return other.map(MenuItem::SubHeader),
    }
    match content::update::<sub_child_header::Entity, _, _>(db, id, patch).await {
        Err(ServiceError::NotFound(_)) => Err(ServiceError::not_found(header::Entity::LABEL)),
        other => other.map(MenuItem::SubChildHeader),
    }
}

/// Soft-delete the menu row with this id and everything nested below it.
#[instrument(skip_all, fields(id = %id))]
pub async fn delete(db: &DatabaseConnection, id: &Uuid) -> Result<MenuItem, ServiceError> {
    let txn = db.begin().await?;
    match delete_in(&txn, id).await {
        Ok(item) => {
            txn.commit().await?;
            Ok(item)
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(error = %rb, "menu_rollback_failed");
            }
            Err(e)
        }
    }
}

async fn delete_in(txn: &DatabaseTransaction, id: &Uuid) -> Result<MenuItem, ServiceError> {
    let now: DateTimeWithTimeZone = Utc::now().into();

    if is_live::<header::Entity>(txn, id).await? {
        let sub_ids: Vec<Uuid> = content::live::<sub_header::Entity>()
            .select_only()
            .column(sub_header::Column::Id)
            .filter(sub_header::Column::HeaderId.eq(*id))
            .into_tuple()
            .all(txn)
            .await?;
        let children = mark_deleted::<sub_child_header::Entity>(txn, sub_child_header::Column::SubHeaderId.is_in(sub_ids), now).await?;
        let subs = mark_deleted::<sub_header::Entity>(txn, sub_header::Column::HeaderId.eq(*id), now).await?;
        let deleted = content::soft_delete::<header::Entity, _>(txn, id).await?;
        info!(%id, sub_headers = subs, menu_headers = children, "header_deleted");
        return Ok(MenuItem::Header(deleted));
    }

    if is_live::<sub_header::Entity>(txn, id).await? {
        let children = mark_deleted::<sub_child_header::Entity>(txn, sub_child_header::Column::SubHeaderId.eq(*id), now).await?;
        let deleted = content::soft_delete::<sub_header::Entity, _>(txn, id).await?;
        info!(%id, menu_headers = children, "sub_header_deleted");
        return Ok(MenuItem::SubHeader(deleted));
    }

    match content::soft_delete::<sub_child_header::Entity, _>(txn, id).await {
        Ok(deleted) => Ok(MenuItem::SubChildHeader(deleted)),
        Err(ServiceError::NotFound(_)) => Err(ServiceError::not_found(header::Entity::LABEL)),
        Err(e) => Err(e),
    }
}

async fn is_live<E>(txn: &DatabaseTransaction, id: &Uuid) -> Result<bool, ServiceError>
where
    E: ContentEntity<Id = Uuid>,
    E::Model: Sync,
{
    let n = content::live::<E>().filter(E::id_column().eq(*id)).count(txn).await?;
    Ok(n > 0)
}

/// Stamp `deleted_at` on every live row of `E` matching `filter`.
async fn mark_deleted<E: ContentEntity>(
    txn: &DatabaseTransaction,
    filter: SimpleExpr,
    now: DateTimeWithTimeZone,
) -> Result<u64, ServiceError> {
    let res = E::update_many()
        .col_expr(E::deleted_at_column(), Expr::value(Some(now)))
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(filter)
        .filter(E::deleted_at_column().is_null())
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    fn menu(v: serde_json::Value) -> NewHeader {
        serde_json::from_value(v).unwrap()
    }

    fn services_menu() -> NewHeader {
        menu(json!({
            "title": "Services",
            "link": "/services",
            "subHeaders": [
                {"title": "Cloud", "subMenuHeaders": [{"title": "AWS"}, {"title": "Azure"}]},
                {"title": "Data"}
            ]
        }))
    }

    fn titles<'a>(it: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
        let mut v: Vec<_> = it.collect();
        v.sort();
        v
    }

    #[tokio::test]
    async fn nested_create_round_trips_through_get_all() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create(&db, services_menu()).await?;
        assert_eq!(created.sub_headers.len(), 2);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        create(&db, menu(json!({"title": "About"}))).await?;

        let menus = all(&db).await?;
        assert_eq!(menus.iter().map(|h| h.header.title.as_str()).collect::<Vec<_>>(), vec!["Services", "About"]);
        let services = &menus[0];
        assert_eq!(titles(services.sub_headers.iter().map(|s| s.sub_header.title.as_str())), vec!["Cloud", "Data"]);
        let cloud = services.sub_headers.iter().find(|s| s.sub_header.title == "Cloud").expect("cloud");
        assert_eq!(titles(cloud.menu_headers.iter().map(|c| c.title.as_str())), vec!["AWS", "Azure"]);
        assert!(cloud.menu_headers.iter().all(|c| c.sub_header_id == cloud.sub_header.id));
        assert!(menus[1].sub_headers.is_empty());

        let one = find(&db, &created.header.id).await?;
        assert_eq!(one.sub_headers.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_child_rejects_whole_tree() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bad = menu(json!({"title": "Services", "subHeaders": [{"title": ""}]}));
        assert!(matches!(create(&db, bad).await, Err(ServiceError::Model(_))));
        assert!(all(&db).await?.is_empty());
        assert_eq!(sub_header::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_finds_the_id_at_any_level() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let tree = create(&db, services_menu()).await?;
        let sub = &tree.sub_headers[0];
        let child = &sub.menu_headers[0];

        let patch = MenuPatch { title: Some("Platforms".into()), ..Default::default() };
        let item = update(&db, &sub.sub_header.id, patch).await?;
        assert!(matches!(item, MenuItem::SubHeader(ref m) if m.title == "Platforms"));

        let patch = MenuPatch { link: Some("/aws".into()), ..Default::default() };
        let item = update(&db, &child.id, patch).await?;
        assert!(matches!(item, MenuItem::SubChildHeader(ref m) if m.link.as_deref() == Some("/aws")));

        let item = update(&db, &tree.header.id, MenuPatch::default()).await?;
        assert!(matches!(item, MenuItem::Header(_)));

        let missing = update(&db, &Uuid::new_v4(), MenuPatch::default()).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_header_hides_its_whole_subtree() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let keep = create(&db, menu(json!({"title": "About", "subHeaders": [{"title": "Team"}]}))).await?;
        let gone = create(&db, services_menu()).await?;

        let item = delete(&db, &gone.header.id).await?;
        assert!(matches!(item, MenuItem::Header(ref m) if m.deleted_at.is_some()));

        let menus = all(&db).await?;
        assert_eq!(menus.iter().map(|h| h.header.id).collect::<Vec<_>>(), vec![keep.header.id]);
        assert_eq!(menus[0].sub_headers.len(), 1);

        let live_children = content::live::<sub_child_header::Entity>().count(&db).await?;
        assert_eq!(live_children, 0);
        let live_subs = content::live::<sub_header::Entity>().count(&db).await?;
        assert_eq!(live_subs, 1);

        let again = delete(&db, &gone.header.id).await;
        assert!(matches!(again, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_sub_header_keeps_siblings() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let tree = create(&db, services_menu()).await?;
        let cloud = tree.sub_headers.iter().find(|s| s.sub_header.title == "Cloud").expect("cloud");

        let item = delete(&db, &cloud.sub_header.id).await?;
        assert!(matches!(item, MenuItem::SubHeader(_)));
        let after = find(&db, &tree.header.id).await?;
        assert_eq!(after.sub_headers.iter().map(|s| s.sub_header.title.as_str()).collect::<Vec<_>>(), vec!["Data"]);
        assert_eq!(content::live::<sub_child_header::Entity>().count(&db).await?, 0);

        let data = tree.sub_headers.iter().find(|s| s.sub_header.title == "Data").expect("data");
        assert!(matches!(delete(&db, &data.sub_header.id).await?, MenuItem::SubHeader(_)));
        assert!(find(&db, &tree.header.id).await?.sub_headers.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn deleting_a_leaf_touches_nothing_else() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let tree = create(&db, services_menu()).await?;
        let aws = tree.sub_headers.iter().flat_map(|s| s.menu_headers.iter()).find(|c| c.title == "AWS").expect("aws");

        assert!(matches!(delete(&db, &aws.id).await?, MenuItem::SubChildHeader(_)));
        assert_eq!(content::live::<sub_child_header::Entity>().count(&db).await?, 1);
        assert_eq!(content::live::<sub_header::Entity>().count(&db).await?, 2);
        Ok(())
    }

    #[test]
    fn menu_item_is_tagged_by_level() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let item = MenuItem::SubHeader(sub_header::Model {
            id: Uuid::nil(),
            header_id: Uuid::nil(),
            title: "Cloud".into(),
            link: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        });
        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["level"], "sub_header");
        assert_eq!(v["title"], "Cloud");
    }
}
