//! Create `sub_child_header` table with FK to `sub_header`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SubChildHeader::Table)
                    .if_not_exists()
                    .col(uuid(SubChildHeader::Id).primary_key())
                    .col(uuid(SubChildHeader::SubHeaderId))
                    .col(string(SubChildHeader::Title))
                    .col(string_null(SubChildHeader::Link))
                    .col(timestamp_with_time_zone(SubChildHeader::CreatedAt))
                    .col(timestamp_with_time_zone(SubChildHeader::UpdatedAt))
                    .col(timestamp_with_time_zone_null(SubChildHeader::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_child_header_sub_header")
                            .from(SubChildHeader::Table, SubChildHeader::SubHeaderId)
                            .to(SubHeader::Table, SubHeader::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SubChildHeader::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SubChildHeader { Table, Id, SubHeaderId, Title, Link, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum SubHeader { Table, Id }
