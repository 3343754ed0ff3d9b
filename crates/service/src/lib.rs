//! Business operations for site content.
//! - Generic CRUD over every content table, with soft delete.
//! - Manual display ordering: index assignment on create and atomic index swaps.
//! - Relation-carrying list views and the nested navigation menu.
//! - The banner singleton and the website chatbot.

pub mod banner;
pub mod chat;
pub mod content;
pub mod errors;
pub mod menu;
pub mod ordering;
pub mod relations;
#[cfg(test)]
pub mod test_support;
