//! Create `technology` table; optionally linked to a sub-service.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technology::Table)
                    .if_not_exists()
                    .col(uuid(Technology::Id).primary_key())
                    .col(uuid_null(Technology::SubServiceId))
                    .col(string(Technology::Title))
                    .col(string_null(Technology::Image))
                    .col(string_null(Technology::Alt))
                    .col(integer(Technology::Index).default(0))
                    .col(timestamp_with_time_zone(Technology::CreatedAt))
                    .col(timestamp_with_time_zone(Technology::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Technology::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technology_sub_service")
                            .from(Technology::Table, Technology::SubServiceId)
                            .to(SubService::Table, SubService::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Technology::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Technology { Table, Id, SubServiceId, Title, Image, Alt, Index, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum SubService { Table, Id }
