//! DTO for the health check endpoint.

use serde::Serialize;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}
