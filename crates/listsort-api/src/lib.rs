//! # listsort-api
//!
//! HTTP API layer for listsort built on Axum.
//!
//! Serves paginated listings together with the sort links of their
//! columns, plus a health endpoint, request logging and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
