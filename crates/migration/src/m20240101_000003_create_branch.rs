//! Create `branch` table (office locations shown per page).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(uuid(Branch::Id).primary_key())
                    .col(string(Branch::Title))
                    .col(string_null(Branch::Address))
                    .col(string_null(Branch::City))
                    .col(string_null(Branch::State))
                    .col(integer_null(Branch::ZipCode))
                    .col(string_null(Branch::Country))
                    .col(string_null(Branch::PageId))
                    .col(integer(Branch::Index).default(0))
                    .col(timestamp_with_time_zone(Branch::CreatedAt))
                    .col(timestamp_with_time_zone(Branch::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Branch::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Branch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Branch { Table, Id, Title, Address, City, State, ZipCode, Country, PageId, Index, CreatedAt, UpdatedAt, DeletedAt }
