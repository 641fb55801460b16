//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. The loaded configuration is read-only for the lifetime of the
//! process.

pub mod app;
pub mod logging;
pub mod pagination;
pub mod sorting;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::logging::LoggingConfig;
use self::pagination::PaginationConfig;
use self::sorting::SortingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (default.toml + environment overlay + `LISTSORT__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Sort parameter and token encoding settings.
    #[serde(default)]
    pub sorting: SortingConfig,
    /// Page parameter settings.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay
    /// (`config/{env}`) and environment variables prefixed with `LISTSORT`.
    /// Missing files are skipped.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("LISTSORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the request path cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sorting.parameter_name.trim().is_empty() {
            return Err(AppError::configuration("sorting.parameter_name must not be empty"));
        }
        if self.pagination.page_parameter.trim().is_empty() {
            return Err(AppError::configuration(
                "pagination.page_parameter must not be empty",
            ));
        }
        if self.pagination.page_parameter == self.sorting.parameter_name {
            return Err(AppError::configuration(
                "pagination.page_parameter and sorting.parameter_name must differ",
            ));
        }
        if self.pagination.max_per_page == 0 {
            return Err(AppError::configuration("pagination.max_per_page must be positive"));
        }
        Ok(())
    }
}
