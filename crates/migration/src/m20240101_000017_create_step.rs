//! Create `step` table ("steps we follow" process blocks).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Step::Table)
                    .if_not_exists()
                    .col(uuid(Step::Id).primary_key())
                    .col(string(Step::Title))
                    .col(text_null(Step::Description))
                    .col(string_null(Step::Image))
                    .col(timestamp_with_time_zone(Step::CreatedAt))
                    .col(timestamp_with_time_zone(Step::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Step::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Step::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Step { Table, Id, Title, Description, Image, CreatedAt, UpdatedAt, DeletedAt }
