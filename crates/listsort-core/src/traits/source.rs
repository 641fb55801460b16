//! Data-layer trait the pagination adapter delegates to.

use std::fmt;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageResponse, PaginateOptions};

/// A queryable collection that can return one page of its rows.
///
/// Rows are type-erased to JSON so that sources of different entities can
/// live in one [`ModelRegistry`](crate::registry::ModelRegistry). The
/// source owns query execution: it interprets `options.order` (a sort spec
/// string, passed through unvalidated) and computes the page metadata.
#[async_trait]
pub trait PaginatedSource: Send + Sync + fmt::Debug + 'static {
    /// Fetch the page described by `options`.
    async fn paginate(
        &self,
        options: &PaginateOptions,
    ) -> AppResult<PageResponse<serde_json::Value>>;
}
