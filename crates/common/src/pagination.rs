//! Pagination utilities
//!
//! Normalizes the loosely-typed `page` / `limit` / `showAll` query values into a
//! [`ListQuery`] and computes [`PageInfo`] blocks.

use crate::types::PageInfo;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    /// Replace zero values by defaults, clamp the page size to `MAX_PAGE_SIZE` and return
    /// the 0-based page index with the page size.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { DEFAULT_PAGE } else { self.page };
        let per_page = if self.per_page == 0 { DEFAULT_PAGE_SIZE } else { self.per_page.min(MAX_PAGE_SIZE) };
        (page - 1, per_page)
    }

    /// Row offset of the requested page, or `None` when it does not fit in a `u64`.
    pub fn offset(self) -> Option<u64> {
        let (page_idx, per_page) = self.normalize();
        page_idx.checked_mul(per_page)
    }

    pub fn page_info(self, total_items: u64) -> PageInfo {
        let (page_idx, per_page) = self.normalize();
        PageInfo {
            current_page: page_idx + 1,
            total_pages: total_items.div_ceil(per_page),
            total_items,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: DEFAULT_PAGE, per_page: DEFAULT_PAGE_SIZE } }
}

/// What a list endpoint was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListQuery {
    All,
    Page(Pagination),
}

impl ListQuery {
    /// Build from raw query-string values. Unparseable or non-positive numbers fall back
    /// to the defaults; only the exact string `"true"` selects the full listing.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, show_all: Option<&str>) -> Self {
        if show_all == Some("true") {
            return ListQuery::All;
        }
        let parse = |v: Option<&str>, default: u64| {
            v.and_then(|s| s.trim().parse::<i64>().ok())
                .filter(|n| *n > 0)
                .map(|n| n as u64)
                .unwrap_or(default)
        };
        ListQuery::Page(Pagination {
            page: parse(page, DEFAULT_PAGE),
            per_page: parse(limit, DEFAULT_PAGE_SIZE),
        })
    }
}

impl Default for ListQuery {
    fn default() -> Self { ListQuery::Page(Pagination::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_zero_with_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, MAX_PAGE_SIZE);
    }

    #[test]
    fn offset_overflow_is_none() {
        assert_eq!(Pagination { page: 3, per_page: 10 }.offset(), Some(20));
        assert_eq!(Pagination { page: i64::MAX as u64, per_page: 10 }.offset(), None);
        assert_eq!(Pagination { page: u64::MAX, per_page: 1 }.offset(), Some(u64::MAX - 1));
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        let p = Pagination { page: 2, per_page: 3 };
        assert_eq!(p.page_info(7), PageInfo { current_page: 2, total_pages: 3, total_items: 7 });
        assert_eq!(p.page_info(6).total_pages, 2);
        assert_eq!(p.page_info(0).total_pages, 0);
    }

    #[test]
    fn raw_values_parse_leniently() {
        assert_eq!(ListQuery::from_raw(None, None, None), ListQuery::default());
        assert_eq!(
            ListQuery::from_raw(Some("abc"), Some("-4"), Some("false")),
            ListQuery::Page(Pagination { page: 1, per_page: 10 })
        );
        assert_eq!(
            ListQuery::from_raw(Some("3"), Some("25"), None),
            ListQuery::Page(Pagination { page: 3, per_page: 25 })
        );
        assert_eq!(ListQuery::from_raw(Some("3"), None, Some("true")), ListQuery::All);
        assert_eq!(ListQuery::from_raw(None, None, Some("TRUE")), ListQuery::default());
        let huge = ListQuery::from_raw(Some("9223372036854775807"), Some("5000"), None);
        let ListQuery::Page(p) = huge else { panic!("expected a page query") };
        assert_eq!(p.normalize(), (i64::MAX as u64 - 1, MAX_PAGE_SIZE));
    }
}
