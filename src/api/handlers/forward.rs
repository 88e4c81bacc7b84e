//! Handler for short URL forwarding.

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::Redirect,
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its stored URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the stored URL and no body.
///
/// # Errors
///
/// - **404 Not Found**: unknown id
/// - **503 Service Unavailable**: store fault
pub async fn forward_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&id).await?;

    Ok(Redirect::temporary(&location_for(&link.target)))
}

/// Returns the `Location` value for a stored URL.
///
/// The stored string is used as-is when it is a valid header value. Otherwise
/// (e.g. non-ASCII host or path) the parsed URL's ASCII serialization is used.
fn location_for(target: &str) -> String {
    if HeaderValue::from_str(target).is_ok() {
        return target.to_string();
    }

    Url::parse(target)
        .map(String::from)
        .unwrap_or_else(|_| target.to_string())
}
