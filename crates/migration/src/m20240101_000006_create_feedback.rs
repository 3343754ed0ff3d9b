//! Create `feedback` table (client testimonials).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedback::Table)
                    .if_not_exists()
                    .col(uuid(Feedback::Id).primary_key())
                    .col(string(Feedback::Title))
                    .col(string_null(Feedback::SubTitle))
                    .col(text_null(Feedback::Description))
                    .col(string_null(Feedback::Image))
                    .col(string_null(Feedback::Alt))
                    .col(integer(Feedback::Index).default(0))
                    .col(timestamp_with_time_zone(Feedback::CreatedAt))
                    .col(timestamp_with_time_zone(Feedback::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Feedback::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Feedback::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Feedback { Table, Id, Title, SubTitle, Description, Image, Alt, Index, CreatedAt, UpdatedAt, DeletedAt }
