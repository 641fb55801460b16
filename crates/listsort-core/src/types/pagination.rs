//! Pagination types passed to and returned from the data layer.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 25;

/// Options handed to a [`PaginatedSource`](crate::traits::PaginatedSource).
///
/// Callers set whatever they want to pin; the pagination adapter fills the
/// rest from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateOptions {
    /// Page number (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Number of items per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    /// Order clause, a comma-separated sort spec passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl PaginateOptions {
    /// Empty options; everything comes from the request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the page number.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Pin the page size.
    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set a fallback order clause, used when the request has no sort.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Resolve the page window, applying defaults and bounds.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// A resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    ///
    /// The page size upper bound is the caller's business; the pagination
    /// adapter applies `PaginationConfig::max_per_page`.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Calculate the SQL `OFFSET` value, saturating for absurd page numbers.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub page_size: u64,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size.max(1))
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Create an empty response.
    pub fn empty(page_request: &PageRequest) -> Self {
        Self::new(Vec::new(), page_request.page, page_request.page_size, 0)
    }
}
