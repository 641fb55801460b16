//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use listsort_core::codec::SortCodec;
use listsort_core::config::AppConfig;
use listsort_core::paginate::PaginationAdapter;
use listsort_core::registry::ModelRegistry;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything in it is
/// built at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pagination adapter, holding the listing registry and sort codec
    pub paginator: Arc<PaginationAdapter>,
}

impl AppState {
    /// Wires the state from configuration and a populated registry, using
    /// the default token codec.
    pub fn new(config: AppConfig, registry: ModelRegistry) -> Self {
        let codec = SortCodec::new(&config.sorting);
        Self::with_codec(config, registry, codec)
    }

    /// Same as [`new`](Self::new) with a caller-supplied codec.
    pub fn with_codec(config: AppConfig, registry: ModelRegistry, codec: SortCodec) -> Self {
        let paginator = PaginationAdapter::new(
            Arc::new(registry),
            codec,
            config.pagination.clone(),
        );
        Self {
            config: Arc::new(config),
            paginator: Arc::new(paginator),
        }
    }
}
