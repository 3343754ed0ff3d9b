//! Create `banner` table. At most one live row is allowed; enforced in the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(uuid(Banner::Id).primary_key())
                    .col(string(Banner::Title))
                    .col(string_null(Banner::Description))
                    .col(string_null(Banner::ButtonLink))
                    .col(boolean(Banner::Status).default(true))
                    .col(string_null(Banner::Image))
                    .col(timestamp_with_time_zone(Banner::CreatedAt))
                    .col(timestamp_with_time_zone(Banner::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Banner::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Banner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Banner { Table, Id, Title, Description, ButtonLink, Status, Image, CreatedAt, UpdatedAt, DeletedAt }
