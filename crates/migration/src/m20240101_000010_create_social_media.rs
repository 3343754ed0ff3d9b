//! Create `social_media` table (footer links).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMedia::Table)
                    .if_not_exists()
                    .col(uuid(SocialMedia::Id).primary_key())
                    .col(string(SocialMedia::Link))
                    .col(string_null(SocialMedia::Title))
                    .col(string_null(SocialMedia::Icon))
                    .col(boolean(SocialMedia::Active).default(true))
                    .col(integer(SocialMedia::Index).default(0))
                    .col(timestamp_with_time_zone(SocialMedia::CreatedAt))
                    .col(timestamp_with_time_zone(SocialMedia::UpdatedAt))
                    .col(timestamp_with_time_zone_null(SocialMedia::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SocialMedia::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SocialMedia { Table, Id, Link, Title, Icon, Active, Index, CreatedAt, UpdatedAt, DeletedAt }
