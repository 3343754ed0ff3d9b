//! Migrator registering one migration per content table, parents before children.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_service;
mod m20240101_000002_create_industry;
mod m20240101_000003_create_branch;
mod m20240101_000004_create_case_study;
mod m20240101_000005_create_certificate;
mod m20240101_000006_create_feedback;
mod m20240101_000007_create_field;
mod m20240101_000008_create_sub_service;
mod m20240101_000009_create_technology;
mod m20240101_000010_create_social_media;
mod m20240101_000011_create_service_faq;
mod m20240101_000012_create_service_detail;
mod m20240101_000013_create_industry_page;
mod m20240101_000014_create_our_client;
mod m20240101_000015_create_banner;
mod m20240101_000016_create_blog;
mod m20240101_000017_create_step;
mod m20240101_000018_create_user_question;
mod m20240101_000019_create_header;
mod m20240101_000020_create_sub_header;
mod m20240101_000021_create_sub_child_header;
mod m20240101_000099_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_service::Migration),
            Box::new(m20240101_000002_create_industry::Migration),
            Box::new(m20240101_000003_create_branch::Migration),
            Box::new(m20240101_000004_create_case_study::Migration),
            Box::new(m20240101_000005_create_certificate::Migration),
            Box::new(m20240101_000006_create_feedback::Migration),
            Box::new(m20240101_000007_create_field::Migration),
            Box::new(m20240101_000008_create_sub_service::Migration),
            Box::new(m20240101_000009_create_technology::Migration),
            Box::new(m20240101_000010_create_social_media::Migration),
            Box::new(m20240101_000011_create_service_faq::Migration),
            Box::new(m20240101_000012_create_service_detail::Migration),
            Box::new(m20240101_000013_create_industry_page::Migration),
            Box::new(m20240101_000014_create_our_client::Migration),
            Box::new(m20240101_000015_create_banner::Migration),
            Box::new(m20240101_000016_create_blog::Migration),
            Box::new(m20240101_000017_create_step::Migration),
            Box::new(m20240101_000018_create_user_question::Migration),
            Box::new(m20240101_000019_create_header::Migration),
            Box::new(m20240101_000020_create_sub_header::Migration),
            Box::new(m20240101_000021_create_sub_child_header::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000099_add_indexes::Migration),
        ]
    }
}
