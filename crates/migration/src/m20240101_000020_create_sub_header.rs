//! Create `sub_header` table with FK to `header`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubHeader::Table)
                    .if_not_exists()
                    .col(uuid(SubHeader::Id).primary_key())
                    .col(uuid(SubHeader::HeaderId))
                    .col(string(SubHeader::Title))
                    .col(string_null(SubHeader::Link))
                    .col(timestamp_with_time_zone(SubHeader::CreatedAt))
                    .col(timestamp_with_time_zone(SubHeader::UpdatedAt))
                    .col(timestamp_with_time_zone_null(SubHeader::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_header_header")
                            .from(SubHeader::Table, SubHeader::HeaderId)
                            .to(Header::Table, Header::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SubHeader::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SubHeader { Table, Id, HeaderId, Title, Link, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum Header { Table, Id }
