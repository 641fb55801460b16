//! Core type definitions used across the listsort workspace.

pub mod pagination;
pub mod params;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse, PaginateOptions};
pub use params::RequestParams;
pub use sorting::{SortDirection, SortField, SortSpec};
