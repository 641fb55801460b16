//! Controller-side pagination: merges the request's page and sort
//! parameters into the query options and delegates to the data layer.

use std::sync::Arc;

use tracing::debug;

use crate::codec::SortCodec;
use crate::config::pagination::PaginationConfig;
use crate::error::AppError;
use crate::registry::ModelRegistry;
use crate::result::AppResult;
use crate::traits::PaginatedSource;
use crate::types::pagination::{PageResponse, PaginateOptions};
use crate::types::params::RequestParams;

/// What to paginate: a registered model name or a source at hand.
#[derive(Debug, Clone)]
pub enum ModelRef<'a> {
    /// Resolved through the [`ModelRegistry`].
    Name(&'a str),
    /// Used directly.
    Source(Arc<dyn PaginatedSource>),
}

impl<'a> From<&'a str> for ModelRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl From<Arc<dyn PaginatedSource>> for ModelRef<'_> {
    fn from(source: Arc<dyn PaginatedSource>) -> Self {
        Self::Source(source)
    }
}

/// Paginates models according to the current request.
#[derive(Debug, Clone)]
pub struct PaginationAdapter {
    registry: Arc<ModelRegistry>,
    codec: SortCodec,
    config: PaginationConfig,
}

impl PaginationAdapter {
    /// Creates an adapter over a startup-built registry and codec.
    pub fn new(registry: Arc<ModelRegistry>, codec: SortCodec, config: PaginationConfig) -> Self {
        Self {
            registry,
            codec,
            config,
        }
    }

    /// The sort codec shared with link rendering.
    pub fn codec(&self) -> &SortCodec {
        &self.codec
    }

    /// The model registry.
    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Paginate `model` with `options` completed from `params`.
    ///
    /// The source's response is returned verbatim.
    pub async fn paginate<'a>(
        &self,
        model: impl Into<ModelRef<'a>>,
        params: &RequestParams,
        options: PaginateOptions,
    ) -> AppResult<PageResponse<serde_json::Value>> {
        let sort = self.codec.current_sort_token(params)?;
        self.paginate_with_sort(model, params, sort.as_deref(), options)
            .await
    }

    /// Like [`paginate`](Self::paginate), with the request's sort already
    /// decoded by the caller (see
    /// [`SortLinkBuilder::current_token`](crate::link::SortLinkBuilder::current_token)).
    pub async fn paginate_with_sort<'a>(
        &self,
        model: impl Into<ModelRef<'a>>,
        params: &RequestParams,
        sort: Option<&str>,
        options: PaginateOptions,
    ) -> AppResult<PageResponse<serde_json::Value>> {
        let source = match model.into() {
            ModelRef::Name(name) => self.registry.resolve(name)?.source().clone(),
            ModelRef::Source(source) => source,
        };
        let options = self.merge_with_sort(params, sort, options)?;
        debug!(
            page = ?options.page,
            per_page = ?options.per_page,
            order = ?options.order,
            "Paginating"
        );
        source.paginate(&options).await
    }

    /// Fill `page` and `per_page` from the request where the caller left
    /// them unset, and let the request's sort override `order`.
    pub fn merge_options(
        &self,
        params: &RequestParams,
        options: PaginateOptions,
    ) -> AppResult<PaginateOptions> {
        let sort = self.codec.current_sort_token(params)?;
        self.merge_with_sort(params, sort.as_deref(), options)
    }

    /// [`merge_options`](Self::merge_options) with an already decoded sort;
    /// the sort parameter itself is not read.
    pub fn merge_with_sort(
        &self,
        params: &RequestParams,
        sort: Option<&str>,
        mut options: PaginateOptions,
    ) -> AppResult<PaginateOptions> {
        if options.page.is_none() {
            let page = self
                .numeric_param(params, &self.config.page_parameter)?
                .unwrap_or(1);
            options.page = Some(page.max(1));
        }

        if options.per_page.is_none() {
            let per_page = self
                .numeric_param(params, &self.config.per_page_parameter)?
                .unwrap_or(self.config.default_per_page);
            options.per_page = Some(per_page.clamp(1, self.config.max_per_page));
        }

        if let Some(order) = sort {
            options.order = Some(order.to_string());
        }

        Ok(options)
    }

    fn numeric_param(&self, params: &RequestParams, name: &str) -> AppResult<Option<u64>> {
        params
            .get_non_blank(name)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::validation(format!("Invalid '{name}' parameter: '{raw}'"))
                })
            })
            .transpose()
    }
}
