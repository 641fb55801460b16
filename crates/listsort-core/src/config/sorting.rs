//! Sort parameter and token encoding configuration.

use serde::{Deserialize, Serialize};

/// What to do with a sort token the codec cannot decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidTokenPolicy {
    /// Log a warning and behave as if no sort was requested.
    #[default]
    Ignore,
    /// Fail the request with a validation error.
    Reject,
}

/// Sort parameter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortingConfig {
    /// Query parameter carrying the sort token.
    #[serde(default = "default_parameter_name")]
    pub parameter_name: String,
    /// Whether sort tokens are encoded in URLs.
    #[serde(default)]
    pub encode_tokens: bool,
    /// Handling of undecodable tokens.
    #[serde(default)]
    pub invalid_token: InvalidTokenPolicy,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            parameter_name: default_parameter_name(),
            encode_tokens: false,
            invalid_token: InvalidTokenPolicy::default(),
        }
    }
}

fn default_parameter_name() -> String {
    "sort".to_string()
}
