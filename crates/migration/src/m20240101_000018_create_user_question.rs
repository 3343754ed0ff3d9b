//! Create `user_question` table: chatbot question/answer history.
//!
//! Ids are 36-character UUID strings; `user_id` refers to an externally managed account
//! and carries no FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserQuestion::Table)
                    .if_not_exists()
                    .col(string_len(UserQuestion::Id, 36).primary_key())
                    .col(text(UserQuestion::Question))
                    .col(text(UserQuestion::Answer))
                    .col(json_null(UserQuestion::Keywords))
                    .col(string_len_null(UserQuestion::UserId, 36))
                    .col(text_null(UserQuestion::Error))
                    .col(timestamp_with_time_zone(UserQuestion::CreatedAt))
                    .col(timestamp_with_time_zone(UserQuestion::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(UserQuestion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum UserQuestion { Table, Id, Question, Answer, Keywords, UserId, Error, CreatedAt, UpdatedAt }
