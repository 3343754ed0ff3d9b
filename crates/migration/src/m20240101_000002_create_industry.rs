//! Create `industry` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Industry::Table)
                    .if_not_exists()
                    .col(uuid(Industry::Id).primary_key())
                    .col(string(Industry::Title))
                    .col(text_null(Industry::Description))
                    .col(string_null(Industry::ButtonLink))
                    .col(string_null(Industry::Image))
                    .col(string_null(Industry::Alt))
                    .col(string_null(Industry::Icon))
                    .col(string_null(Industry::IconAlt))
                    .col(integer(Industry::Index).default(0))
                    .col(timestamp_with_time_zone(Industry::CreatedAt))
                    .col(timestamp_with_time_zone(Industry::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Industry::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Industry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Industry { Table, Id, Title, Description, ButtonLink, Image, Alt, Icon, IconAlt, Index, CreatedAt, UpdatedAt, DeletedAt }
