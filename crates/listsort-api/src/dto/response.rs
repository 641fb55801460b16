//! Response DTOs.

use serde::{Deserialize, Serialize};

use listsort_core::link::SortLink;
use listsort_core::types::pagination::PageResponse;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// One page of a listing with the sort links of its columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Listing name.
    pub listing: String,
    /// Sort spec in effect for this request, if any.
    pub sort: Option<String>,
    /// Page returned by the data source.
    pub page: PageResponse<serde_json::Value>,
    /// Column header links.
    pub links: Vec<SortLink>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Registered listings.
    pub listings: Vec<String>,
}
