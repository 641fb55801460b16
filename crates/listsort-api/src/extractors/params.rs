//! Query parameter extractor for listing endpoints.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;

use listsort_core::types::params::RequestParams;

/// The request path and its full query parameter set.
///
/// Sort links rebuild the current URL from both, so unrelated filters in
/// the query string survive a change of sort order.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    /// Request path, without the query string.
    pub path: String,
    /// Decoded query parameters, in request order.
    pub params: RequestParams,
}

impl<S> FromRequestParts<S> for ListRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers see a URI with their prefix stripped.
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or(&parts.uri);

        Ok(Self {
            path: uri.path().to_string(),
            params: uri
                .query()
                .map(RequestParams::from_query)
                .unwrap_or_default(),
        })
    }
}
