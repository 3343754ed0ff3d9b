use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Pagination block attached to paged list responses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
}

/// A list result: either the whole collection (`page_info == None`) or one page of it.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page_info: Option<PageInfo>,
}

impl<T> Listing<T> {
    pub fn all(items: Vec<T>) -> Self {
        Self { items, page_info: None }
    }
}
