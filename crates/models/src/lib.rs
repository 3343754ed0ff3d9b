//! sea-orm entities for the site content tables, their input schemas and the
//! traits the service layer uses to treat them uniformly.

pub mod errors;
pub mod db;
pub mod content;

pub mod banner;
pub mod blog;
pub mod branch;
pub mod case_study;
pub mod certificate;
pub mod feedback;
pub mod field;
pub mod header;
pub mod industry;
pub mod industry_page;
pub mod our_client;
pub mod service;
pub mod service_detail;
pub mod service_faq;
pub mod social_media;
pub mod step;
pub mod sub_child_header;
pub mod sub_header;
pub mod sub_service;
pub mod technology;
pub mod user_question;

#[cfg(test)]
mod tests;
