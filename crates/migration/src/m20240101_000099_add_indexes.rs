//! Secondary indexes. Applied after every table exists.
use sea_orm_migration::prelude::*;

/// Tables carrying a manual display `index` column.
const ORDERED_TABLES: &[&str] = &[
    "service",
    "industry",
    "branch",
    "case_study",
    "certificate",
    "feedback",
    "field",
    "technology",
    "social_media",
    "service_faq",
    "service_detail",
    "industry_page",
    "our_client",
];

/// Tables looked up by slug.
const SLUG_TABLES: &[&str] = &["case_study", "field", "service_detail", "industry_page"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Display order; not unique, equal values are tolerated
        for table in ORDERED_TABLES {
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_index"))
                        .table(Alias::new(*table))
                        .col(Alias::new("index"))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        for table in SLUG_TABLES {
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{table}_slug"))
                        .table(Alias::new(*table))
                        .col(Alias::new("slug"))
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        // Chat history: per-user, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_user_question_user_created")
                    .table(UserQuestion::Table)
                    .col(UserQuestion::UserId)
                    .col(UserQuestion::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_question_user_created").table(UserQuestion::Table).to_owned())
            .await?;
        for table in SLUG_TABLES {
            manager
                .drop_index(Index::drop().name(format!("idx_{table}_slug")).table(Alias::new(*table)).to_owned())
                .await?;
        }
        for table in ORDERED_TABLES {
            manager
                .drop_index(Index::drop().name(format!("idx_{table}_index")).table(Alias::new(*table)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserQuestion { Table, UserId, CreatedAt }
