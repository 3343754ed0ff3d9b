//! Create `blog` table (links to externally hosted posts).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(uuid(Blog::Id).primary_key())
                    .col(string(Blog::Title))
                    .col(string_null(Blog::Description))
                    .col(string_null(Blog::BlogLink))
                    .col(string_null(Blog::Image))
                    .col(string_null(Blog::Alt))
                    .col(timestamp_with_time_zone(Blog::CreatedAt))
                    .col(timestamp_with_time_zone(Blog::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Blog::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Blog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Blog { Table, Id, Title, Description, BlogLink, Image, Alt, CreatedAt, UpdatedAt, DeletedAt }
