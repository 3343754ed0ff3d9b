//! Create `certificate` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(uuid(Certificate::Id).primary_key())
                    .col(string(Certificate::Title))
                    .col(string_null(Certificate::Image))
                    .col(string_null(Certificate::Alt))
                    .col(integer(Certificate::Index).default(0))
                    .col(timestamp_with_time_zone(Certificate::CreatedAt))
                    .col(timestamp_with_time_zone(Certificate::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Certificate::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Certificate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Certificate { Table, Id, Title, Image, Alt, Index, CreatedAt, UpdatedAt, DeletedAt }
