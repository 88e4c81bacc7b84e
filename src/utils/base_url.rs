//! Base URL reconstruction from HTTP request data.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

/// Header set by reverse proxies to carry the client-facing scheme.
const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Rebuilds `scheme://host[:port]` of the incoming request.
///
/// # Resolution
///
/// - **Scheme**: first `X-Forwarded-Proto` value if it is `http` or `https`,
///   otherwise the request URI scheme, otherwise `http`
/// - **Host**: the `Host` header (port preserved), otherwise the request URI
///   authority
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if no host can be determined or the
/// `Host` header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "s.example.com:8000".parse().unwrap());
///
/// let base = extract_base_url(&"/encode".parse().unwrap(), &headers).unwrap();
/// assert_eq!(base, "http://s.example.com:8000");
/// ```
pub fn extract_base_url(uri: &Uri, headers: &HeaderMap) -> Result<String, AppError> {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .or_else(|| uri.scheme_str().map(str::to_ascii_lowercase))
        .unwrap_or_else(|| "http".to_string());

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    Ok(format!("{scheme}://{host}"))
}
