//! Create `our_client` table (client logo strip).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OurClient::Table)
                    .if_not_exists()
                    .col(uuid(OurClient::Id).primary_key())
                    .col(string(OurClient::Title))
                    .col(string_null(OurClient::Image))
                    .col(string_null(OurClient::Alt))
                    .col(integer(OurClient::Index).default(0))
                    .col(timestamp_with_time_zone(OurClient::CreatedAt))
                    .col(timestamp_with_time_zone(OurClient::UpdatedAt))
                    .col(timestamp_with_time_zone_null(OurClient::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OurClient::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OurClient { Table, Id, Title, Image, Alt, Index, CreatedAt, UpdatedAt, DeletedAt }
