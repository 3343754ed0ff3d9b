//! Create `industry_page` table with FK to `industry`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IndustryPage::Table)
                    .if_not_exists()
                    .col(uuid(IndustryPage::Id).primary_key())
                    .col(string(IndustryPage::Slug))
                    .col(uuid(IndustryPage::IndustryId))
                    .col(string(IndustryPage::HeroTitle))
                    .col(text(IndustryPage::HeroDescription))
                    .col(string_null(IndustryPage::HeroImage))
                    .col(json_null(IndustryPage::Sections))
                    .col(text_null(IndustryPage::Metas))
                    .col(integer(IndustryPage::Index).default(0))
                    .col(timestamp_with_time_zone(IndustryPage::CreatedAt))
                    .col(timestamp_with_time_zone(IndustryPage::UpdatedAt))
                    .col(timestamp_with_time_zone_null(IndustryPage::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_industry_page_industry")
                            .from(IndustryPage::Table, IndustryPage::IndustryId)
                            .to(Industry::Table, Industry::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(IndustryPage::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum IndustryPage {
    Table,
    Id,
    Slug,
    IndustryId,
    HeroTitle,
    HeroDescription,
    HeroImage,
    Sections,
    Metas,
    Index,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Industry { Table, Id }
