//! Custom Axum extractors.

pub mod params;

pub use params::ListRequest;
