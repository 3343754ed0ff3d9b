//! Create `field` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Field::Table)
                    .if_not_exists()
                    .col(uuid(Field::Id).primary_key())
                    .col(string(Field::Slug))
                    .col(string(Field::Title))
                    .col(text_null(Field::Description))
                    .col(string_null(Field::ButtonText))
                    .col(string_null(Field::ButtonLink))
                    .col(string_null(Field::Image))
                    .col(integer(Field::Index).default(0))
                    .col(timestamp_with_time_zone(Field::CreatedAt))
                    .col(timestamp_with_time_zone(Field::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Field::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Field::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Field { Table, Id, Slug, Title, Description, ButtonText, ButtonLink, Image, Index, CreatedAt, UpdatedAt, DeletedAt }
