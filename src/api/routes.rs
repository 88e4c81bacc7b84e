//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler, forward_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /health`      - Liveness check (never touches the store)
/// - `POST /encode`      - Create a short link
/// - `GET  /decode/{id}` - Resolve an id to `{ url, short }`
/// - `GET  /{id}`        - 307 redirect to the stored URL
///
/// Static segments take precedence over `/{id}`, so `health`, `encode` and
/// `decode` are never treated as ids.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/encode", post(encode_handler))
        .route("/decode/{id}", get(decode_handler))
        .route("/{id}", get(forward_handler))
}
