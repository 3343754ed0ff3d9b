//! Create `service_detail` table: one landing page per service, addressed by slug.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceDetail::Table)
                    .if_not_exists()
                    .col(uuid(ServiceDetail::Id).primary_key())
                    .col(string(ServiceDetail::Slug))
                    .col(uuid(ServiceDetail::ServiceId))
                    .col(string(ServiceDetail::HeroTitle))
                    .col(text_null(ServiceDetail::HeroDescription))
                    .col(string_null(ServiceDetail::HeroButtonText))
                    .col(string_null(ServiceDetail::HeroButtonLink))
                    .col(json_null(ServiceDetail::Sections))
                    .col(text_null(ServiceDetail::Metas))
                    .col(integer(ServiceDetail::Index).default(0))
                    .col(timestamp_with_time_zone(ServiceDetail::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceDetail::UpdatedAt))
                    .col(timestamp_with_time_zone_null(ServiceDetail::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_detail_service")
                            .from(ServiceDetail::Table, ServiceDetail::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceDetail::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceDetail {
    Table,
    Id,
    Slug,
    ServiceId,
    HeroTitle,
    HeroDescription,
    HeroButtonText,
    HeroButtonLink,
    Sections,
    Metas,
    Index,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Service { Table, Id }
