//! Pagination utilities for list endpoints

use serde::Deserialize;
use validator::Validate;

/// Pagination query parameters
///
/// Values are signed so that `page=-1` reaches validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    #[serde(default = "PaginationParams::default_page")]
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub page: i64,

    /// Items per page
    #[serde(default = "PaginationParams::default_per_page")]
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    pub per_page: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: Self::default_page(),
            per_page: Self::default_per_page(),
        }
    }
}

impl PaginationParams {
    fn default_page() -> i64 {
        1
    }

    fn default_per_page() -> i64 {
        10
    }

    /// Calculate SQL OFFSET
    ///
    /// `None` when the page lies beyond any offset Postgres can address, so
    /// it cannot hold rows.
    pub fn offset(&self) -> Option<i64> {
        (self.page - 1).checked_mul(self.per_page)
    }

    /// Calculate SQL LIMIT
    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Navigation metadata attached to a page of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub prev_page: Option<String>,
    pub next_page: Option<String>,
    pub total_pages: i64,
    pub total_items: i64,
}

impl PageMeta {
    /// `base_path` is the listing path the links point back to, e.g.
    /// `/theater/movies/`.
    pub fn new(params: &PaginationParams, total_items: i64, base_path: &str) -> Self {
        let total_pages = total_pages(total_items, params.per_page);

        let prev_page = (params.page != 1)
            .then(|| page_link(base_path, params.page - 1, params.per_page));
        // Equality, not `<`: a page past the end still links forward.
        let next_page = params
            .page
            .checked_add(1)
            .filter(|_| params.page != total_pages)
            .map(|next| page_link(base_path, next, params.per_page));

        Self {
            prev_page,
            next_page,
            total_pages,
            total_items,
        }
    }
}

/// Ceiling division; zero items means zero pages.
pub fn total_pages(total_items: i64, per_page: i64) -> i64 {
    if total_items <= 0 || per_page <= 0 {
        return 0;
    }
    (total_items + per_page - 1) / per_page
}

fn page_link(base_path: &str, page: i64, per_page: i64) -> String {
    format!("{}?page={}&per_page={}", base_path, page, per_page)
}
