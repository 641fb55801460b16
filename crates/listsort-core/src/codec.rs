//! Conversion between the sort query parameter and sort-spec strings.

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use tracing::{debug, warn};

use crate::config::sorting::{InvalidTokenPolicy, SortingConfig};
use crate::error::{AppError, ErrorKind};
use crate::result::AppResult;
use crate::types::params::RequestParams;

/// A reversible transform applied to sort specs before they go into URLs.
///
/// Implementations must satisfy `decode(&encode(s)) == s` for every sort
/// spec they are given. `decode` may see arbitrary client input and should
/// fail rather than panic on it.
pub trait TokenCodec: Send + Sync + fmt::Debug {
    /// Turn a sort spec into an opaque token.
    fn encode(&self, spec: &str) -> String;

    /// Recover the sort spec from a token produced by [`encode`](Self::encode).
    fn decode(&self, token: &str) -> AppResult<String>;
}

/// Base64 (URL-safe alphabet) token codec.
///
/// The input is right-padded with spaces to a multiple of three bytes so
/// the output never carries `=` padding; decoding strips them again.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl TokenCodec for Base64Codec {
    fn encode(&self, spec: &str) -> String {
        let mut padded = spec.to_string();
        while padded.len() % 3 != 0 {
            padded.push(' ');
        }
        URL_SAFE.encode(padded.as_bytes()).trim_end().to_string()
    }

    fn decode(&self, token: &str) -> AppResult<String> {
        let bytes = URL_SAFE.decode(token.trim())?;
        let spec = String::from_utf8(bytes).map_err(|e| {
            AppError::with_source(ErrorKind::Validation, "Sort token is not valid UTF-8", e)
        })?;
        Ok(spec.trim().to_string())
    }
}

/// Reads and writes the sort query parameter.
///
/// Built once from [`SortingConfig`] at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SortCodec {
    parameter_name: String,
    enabled: bool,
    invalid_token: InvalidTokenPolicy,
    codec: Arc<dyn TokenCodec>,
}

impl SortCodec {
    /// Codec using [`Base64Codec`] when encoding is enabled.
    pub fn new(config: &SortingConfig) -> Self {
        Self::with_codec(config, Arc::new(Base64Codec))
    }

    /// Codec using a custom reversible transform.
    pub fn with_codec(config: &SortingConfig, codec: Arc<dyn TokenCodec>) -> Self {
        Self {
            parameter_name: config.parameter_name.clone(),
            enabled: config.encode_tokens,
            invalid_token: config.invalid_token,
            codec,
        }
    }

    /// Name of the sort query parameter.
    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    /// Whether tokens are encoded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sort spec → token for a URL.
    pub fn encode(&self, spec: &str) -> String {
        if self.enabled {
            self.codec.encode(spec)
        } else {
            spec.to_string()
        }
    }

    /// Token from a URL → sort spec.
    pub fn decode(&self, token: &str) -> AppResult<String> {
        if self.enabled {
            self.codec.decode(token)
        } else {
            Ok(token.to_string())
        }
    }

    /// The decoded sort spec of the current request, or `None` when the
    /// request has no (or a blank) sort parameter.
    ///
    /// A token that fails to decode is treated as absent under
    /// [`InvalidTokenPolicy::Ignore`] and is a validation error under
    /// [`InvalidTokenPolicy::Reject`].
    pub fn current_sort_token(&self, params: &RequestParams) -> AppResult<Option<String>> {
        let Some(token) = params.get_non_blank(&self.parameter_name) else {
            return Ok(None);
        };

        match self.decode(token) {
            Ok(spec) if spec.trim().is_empty() => Ok(None),
            Ok(spec) => {
                debug!(parameter = %self.parameter_name, sort = %spec, "Decoded sort token");
                Ok(Some(spec))
            }
            Err(e) => match self.invalid_token {
                InvalidTokenPolicy::Ignore => {
                    warn!(
                        parameter = %self.parameter_name,
                        token = %token,
                        error = %e,
                        "Ignoring undecodable sort token"
                    );
                    Ok(None)
                }
                InvalidTokenPolicy::Reject => Err(AppError::validation(format!(
                    "Invalid '{}' parameter: {}",
                    self.parameter_name, e.message
                ))),
            },
        }
    }
}

impl Default for SortCodec {
    fn default() -> Self {
        Self::new(&SortingConfig::default())
    }
}
