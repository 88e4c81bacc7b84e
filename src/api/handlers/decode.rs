//! Handler for the decode endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Uri},
};

use crate::api::dto::link::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::extract_base_url;

/// Returns the stored URL and the fully-qualified short URL for an id.
///
/// # Endpoint
///
/// `GET /decode/{id}`
///
/// # Errors
///
/// - **404 Not Found**: unknown id
/// - **400 Bad Request**: no Host header
/// - **503 Service Unavailable**: store fault
pub async fn decode_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let base_url = extract_base_url(&uri, &headers)?;

    let link = state.link_service.resolve(&id).await?;

    Ok(Json(ShortUrlResponse::from_link(link, &base_url)))
}
