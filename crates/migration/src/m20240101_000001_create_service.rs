//! Create `service` table.
//!
//! Top-level service offerings; parent of FAQs, sub-services and service detail pages.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(string(Service::Title))
                    .col(text_null(Service::ShortDescription))
                    .col(text_null(Service::LongDescription))
                    .col(string_null(Service::ButtonLink))
                    .col(string_null(Service::Image))
                    .col(integer(Service::Index).default(0))
                    .col(timestamp_with_time_zone(Service::CreatedAt))
                    .col(timestamp_with_time_zone(Service::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Service::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service { Table, Id, Title, ShortDescription, LongDescription, ButtonLink, Image, Index, CreatedAt, UpdatedAt, DeletedAt }
