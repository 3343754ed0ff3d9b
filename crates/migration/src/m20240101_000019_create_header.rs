//! Create `header` table, the top level of the navigation menu.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Header::Table)
                    .if_not_exists()
                    .col(uuid(Header::Id).primary_key())
                    .col(string(Header::Title))
                    .col(string_null(Header::Link))
                    .col(timestamp_with_time_zone(Header::CreatedAt))
                    .col(timestamp_with_time_zone(Header::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Header::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Header::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Header { Table, Id, Title, Link, CreatedAt, UpdatedAt, DeletedAt }
