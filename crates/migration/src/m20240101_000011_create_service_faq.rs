//! Create `service_faq` table with FK to `service`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceFaq::Table)
                    .if_not_exists()
                    .col(uuid(ServiceFaq::Id).primary_key())
                    .col(uuid(ServiceFaq::ServiceId))
                    .col(string(ServiceFaq::Question))
                    .col(text(ServiceFaq::Answer))
                    .col(integer(ServiceFaq::Index).default(0))
                    .col(timestamp_with_time_zone(ServiceFaq::CreatedAt))
                    .col(timestamp_with_time_zone(ServiceFaq::UpdatedAt))
                    .col(timestamp_with_time_zone_null(ServiceFaq::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_faq_service")
                            .from(ServiceFaq::Table, ServiceFaq::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceFaq::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceFaq { Table, Id, ServiceId, Question, Answer, Index, CreatedAt, UpdatedAt, DeletedAt }

#[derive(DeriveIden)]
enum Service { Table, Id }
