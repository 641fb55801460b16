//! Route definitions for the listsort HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to handlers via Axum's `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request-logging layer.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(listing_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Paginated listings
fn listing_routes() -> Router<AppState> {
    Router::new().route("/lists/{name}", get(handlers::listing::list))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
