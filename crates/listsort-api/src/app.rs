//! Application builder: wires router, middleware and state into an Axum
//! app and serves it.

use axum::Router;
use tower_http::trace::TraceLayer;

use listsort_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let addr = state.config.server.bind_address();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("listsort server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("listsort server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
}
