//! Listing handler.

use axum::Json;
use axum::extract::{Path, State};

use listsort_core::link::{LinkOptions, SortLinkBuilder};

use crate::dto::response::{ApiResponse, ListingResponse};
use crate::error::ApiError;
use crate::extractors::ListRequest;
use crate::state::AppState;

/// GET /api/lists/{name}
///
/// Honors the configured page, page-size and sort parameters.
pub async fn list(
    State(state): State<AppState>,
    Path(name): Path<String>,
    request: ListRequest,
) -> Result<Json<ApiResponse<ListingResponse>>, ApiError> {
    let paginator = &state.paginator;
    let listing = paginator.registry().resolve(&name)?;

    let builder = SortLinkBuilder::new(paginator.codec(), &request.params, &request.path)?;
    let page = paginator
        .paginate_with_sort(
            listing.source().clone(),
            &request.params,
            builder.current_token(),
            listing.default_options(),
        )
        .await?;

    let links = listing
        .columns()
        .iter()
        .map(|column| {
            let options = if column.default {
                LinkOptions::new().as_default()
            } else {
                LinkOptions::new()
            };
            builder.sort_link(&column.label, &column.field, options)
        })
        .collect();

    Ok(Json(ApiResponse::ok(ListingResponse {
        listing: listing.name().to_string(),
        sort: builder.current_sort().map(ToString::to_string),
        page,
        links,
    })))
}
