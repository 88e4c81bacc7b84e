//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is serving requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// Does not consult the store, so it returns `200 {"message":"OK"}` even when
/// the store is unreachable.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
