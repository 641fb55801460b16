//! Page parameter configuration.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PER_PAGE: u64 = 25;
/// Maximum page size.
const MAX_PER_PAGE: u64 = 100;

/// Names and limits of the request's paging parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Query parameter carrying the 1-based page number.
    #[serde(default = "default_page_parameter")]
    pub page_parameter: String,
    /// Query parameter carrying the page size.
    #[serde(default = "default_per_page_parameter")]
    pub per_page_parameter: String,
    /// Page size used when the request does not carry one.
    #[serde(default = "default_per_page")]
    pub default_per_page: u64,
    /// Upper bound for a requested page size.
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_parameter: default_page_parameter(),
            per_page_parameter: default_per_page_parameter(),
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

fn default_page_parameter() -> String {
    "page".to_string()
}

fn default_per_page_parameter() -> String {
    "per_page".to_string()
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

fn default_max_per_page() -> u64 {
    MAX_PER_PAGE
}
