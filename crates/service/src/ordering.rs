//! Manual display ordering for orderable content.
//!
//! New rows are appended after the current largest `index`; reordering happens
//! only by swapping the `index` values of two rows inside one transaction.
//! Two concurrent creates may compute the same index, and overlapping swaps are
//! last-writer-wins. Both are tolerated: ties are broken by `created_at` then id.

use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use tracing::{info, instrument, warn};

use models::content::{ContentEntity, Orderable};

use crate::content;
use crate::errors::ServiceError;

/// Index for the next row of `E`: one past the largest index among non-deleted rows,
/// or 1 when the collection is empty.
pub async fn next_index<E, C>(db: &C) -> Result<i32, ServiceError>
where
    E: Orderable,
    C: ConnectionTrait,
{
    next_index_in::<E, C>(db, E::index_column()).await
}

pub(crate) async fn next_index_in<E, C>(db: &C, col: E::Column) -> Result<i32, ServiceError>
where
    E: ContentEntity,
    C: ConnectionTrait,
{
    let max = E::find()
        .select_only()
        .column_as(col.max(), "max_index")
        .filter(E::deleted_at_column().is_null())
        .into_tuple::<Option<i32>>()
        .one(db)
        .await?;
    Ok(max.flatten().unwrap_or(0) + 1)
}

/// Exchange the `index` values of two rows and return the reordered collection.
///
/// Both rows must exist and not be soft-deleted; otherwise nothing is written.
#[instrument(skip_all, fields(entity = E::LABEL, first = %first, second = %second))]
pub async fn swap_indexes<E>(db: &DatabaseConnection, first: &E::Id, second: &E::Id) -> Result<Vec<E::Model>, ServiceError>
where
    E: Orderable,
{
    let a = content::find::<E, _>(db, first).await?;
    let b = content::find::<E, _>(db, second).await?;
    let (a_index, b_index) = (E::index_of(&a), E::index_of(&b));

    apply_swap::<E>(db, (first, b_index), (second, a_index)).await?;
    info!(entity = E::LABEL, %first, %second, a_index, b_index, "indexes_swapped");

    content::all::<E, _>(db).await
}

/// Write `first.1` to row `first.0` and `second.1` to row `second.0` atomically.
///
/// Each write has to hit exactly one live row. If either misses, the transaction is
/// rolled back and [`ServiceError::NotFound`] returned.
pub async fn apply_swap<E>(db: &DatabaseConnection, first: (&E::Id, i32), second: (&E::Id, i32)) -> Result<(), ServiceError>
where
    E: Orderable,
{
    let txn = db.begin().await?;
    let written = async {
        set_index::<E>(&txn, first.0, first.1).await?;
        set_index::<E>(&txn, second.0, second.1).await
    }
    .await;

    match written {
        Ok(()) => {
            txn.commit().await?;
            Ok(())
        }
        Err(e) => {
            if let Err(rb) = txn.rollback().await {
                warn!(entity = E::LABEL, error = %rb, "swap_rollback_failed");
            }
            Err(e)
        }
    }
}

async fn set_index<E>(txn: &DatabaseTransaction, id: &E::Id, index: i32) -> Result<(), ServiceError>
where
    E: Orderable,
{
    let now: DateTimeWithTimeZone = Utc::now().into();
    let res = E::update_many()
        .col_expr(E::index_column(), Expr::value(index))
        .col_expr(E::updated_at_column(), Expr::value(now))
        .filter(E::id_column().eq(id.clone()))
        .filter(E::deleted_at_column().is_null())
        .exec(txn)
        .await?;
    if res.rows_affected != 1 {
        return Err(ServiceError::not_found(E::LABEL));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::{case_study, technology};
    use serde_json::json;
    use uuid::Uuid;

    async fn tech(db: &DatabaseConnection, title: &str) -> Result<technology::Model, ServiceError> {
        let draft = technology::NewTechnology { title: title.into(), sub_service_id: None, image: None, alt: None };
        content::create::<technology::Entity, _, _>(db, draft).await
    }

    fn indexes(rows: &[technology::Model]) -> Vec<i32> {
        let mut v: Vec<i32> = rows.iter().map(|r| r.index).collect();
        v.sort_unstable();
        v
    }

    #[tokio::test]
    async fn empty_collection_starts_at_one() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert_eq!(next_index::<technology::Entity, _>(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn creations_get_increasing_indexes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut got = Vec::new();
        for i in 0..5 {
            got.push(tech(&db, &format!("t{i}")).await?.index);
        }
        assert_eq!(got, vec![1, 2, 3, 4, 5]);
        assert_eq!(next_index::<technology::Entity, _>(&db).await?, 6);
        Ok(())
    }

    #[tokio::test]
    async fn swap_first_and_last_of_three() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t1 = tech(&db, "T1").await?;
        let t2 = tech(&db, "T2").await?;
        let t3 = tech(&db, "T3").await?;
        assert_eq!((t1.index, t2.index, t3.index), (1, 2, 3));

        let rows = swap_indexes::<technology::Entity>(&db, &t1.id, &t3.id).await?;
        let order: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        assert_eq!(order, vec![t3.id, t2.id, t1.id]);

        let t1_after = content::find::<technology::Entity, _>(&db, &t1.id).await?;
        let t2_after = content::find::<technology::Entity, _>(&db, &t2.id).await?;
        let t3_after = content::find::<technology::Entity, _>(&db, &t3.id).await?;
        assert_eq!((t1_after.index, t2_after.index, t3_after.index), (3, 2, 1));
        assert_eq!(indexes(&rows), vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn swap_with_missing_row_changes_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = tech(&db, "a").await?;
        let b = tech(&db, "b").await?;

        let err = swap_indexes::<technology::Entity>(&db, &a.id, &Uuid::new_v4()).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));
        let err = swap_indexes::<technology::Entity>(&db, &Uuid::new_v4(), &b.id).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        let rows = content::all::<technology::Entity, _>(&db).await?;
        assert_eq!(rows.iter().map(|r| (r.id, r.index)).collect::<Vec<_>>(), vec![(a.id, 1), (b.id, 2)]);
        Ok(())
    }

    #[tokio::test]
    async fn swap_with_deleted_row_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = tech(&db, "a").await?;
        let b = tech(&db, "b").await?;
        content::soft_delete::<technology::Entity, _>(&db, &b.id).await?;
        let err = swap_indexes::<technology::Entity>(&db, &a.id, &b.id).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));
        assert_eq!(content::find::<technology::Entity, _>(&db, &a.id).await?.index, 1);
        Ok(())
    }

    #[tokio::test]
    async fn failed_second_write_rolls_back_the_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = tech(&db, "a").await?;
        let b = tech(&db, "b").await?;

        // first write succeeds inside the transaction, second targets no row
        let missing = Uuid::new_v4();
        let err = apply_swap::<technology::Entity>(&db, (&a.id, 99), (&missing, a.index)).await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));

        let a_after = content::find::<technology::Entity, _>(&db, &a.id).await?;
        let b_after = content::find::<technology::Entity, _>(&db, &b.id).await?;
        assert_eq!(a_after.index, 1);
        assert_eq!(b_after.index, 2);
        Ok(())
    }

    #[tokio::test]
    async fn integer_keyed_entities_swap_too() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mk = |slug: &str| case_study::NewCaseStudy {
            slug: slug.into(),
            industry_id: None,
            summary: json!({}),
            challenges: None,
            impact: None,
            system_phase: json!([]),
            additional_information: None,
            metas: None,
        };
        let x = content::create::<case_study::Entity, _, _>(&db, mk("x")).await?;
        let y = content::create::<case_study::Entity, _, _>(&db, mk("y")).await?;
        let rows = swap_indexes::<case_study::Entity>(&db, &x.id, &y.id).await?;
        assert_eq!(rows.iter().map(|r| r.slug.as_str()).collect::<Vec<_>>(), vec!["y", "x"]);
        Ok(())
    }
}
