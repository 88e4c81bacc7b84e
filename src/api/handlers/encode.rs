//! Handler for the encode endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, Uri},
};

use crate::api::dto::link::{EncodeRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::extract_base_url;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /encode`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "https://example.com/", "short": "http://s.example.com/aB3dE5gH" }
/// ```
///
/// Encoding the same URL twice yields two distinct short links.
///
/// # Errors
///
/// - **422 Unprocessable Entity**: body is not valid JSON, `url` is missing,
///   or `url` is not an HTTP/HTTPS URL
/// - **400 Bad Request**: no Host header
/// - **503 Service Unavailable**: store fault or id space exhausted
pub async fn encode_handler(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let Json(payload) = payload?;
    let base_url = extract_base_url(&uri, &headers)?;

    let link = state.link_service.encode(&payload.url).await?;

    Ok(Json(ShortUrlResponse::from_link(link, &base_url)))
}
