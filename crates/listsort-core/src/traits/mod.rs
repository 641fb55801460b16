//! Traits implemented by the data layer.

pub mod source;

pub use source::PaginatedSource;
