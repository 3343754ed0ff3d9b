//! Create `case_study` table.
//!
//! The only content table keyed by an auto-increment integer; page sections are JSON documents.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStudy::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseStudy::Id))
                    .col(string(CaseStudy::Slug))
                    .col(uuid_null(CaseStudy::IndustryId))
                    .col(json(CaseStudy::Summary))
                    .col(json_null(CaseStudy::Challenges))
                    .col(json_null(CaseStudy::Impact))
                    .col(json(CaseStudy::SystemPhase))
                    .col(json_null(CaseStudy::AdditionalInformation))
                    .col(text_null(CaseStudy::Metas))
                    .col(integer(CaseStudy::Index).default(0))
                    .col(timestamp_with_time_zone(CaseStudy::CreatedAt))
                    .col(timestamp_with_time_zone(CaseStudy::UpdatedAt))
                    .col(timestamp_with_time_zone_null(CaseStudy::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_case_study_industry")
                            .from(CaseStudy::Table, CaseStudy::IndustryId)
                            .to(Industry::Table, Industry::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CaseStudy::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CaseStudy {
    Table,
    Id,
    Slug,
    IndustryId,
    Summary,
    Challenges,
    Impact,
    SystemPhase,
    AdditionalInformation,
    Metas,
    Index,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Industry { Table, Id }
