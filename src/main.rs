//! listsort server: paginated listings with sortable column links.
//!
//! Loads configuration, initialises logging, registers the demo listings
//! and serves the HTTP API.

mod seed;

use tracing_subscriber::{EnvFilter, fmt};

use listsort_api::AppState;
use listsort_core::config::AppConfig;
use listsort_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("LISTSORT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting listsort v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        sort_parameter = %config.sorting.parameter_name,
        encode_tokens = config.sorting.encode_tokens,
        invalid_token = ?config.sorting.invalid_token,
        "Sorting configured"
    );

    let registry = seed::demo_registry()?;
    let state = AppState::new(config, registry);

    listsort_api::run_server(state).await
}
