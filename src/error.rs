//! HTTP-facing error type.
//!
//! Every failure a handler can produce is funnelled through [`AppError`], which
//! renders a uniform JSON body:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": { "id": "abc" } } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;
use crate::utils::url_validator::UrlValidationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client supplied an unacceptable value (422).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Request is malformed at the transport level (400).
    #[error("{message}")]
    BadRequest { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Every generated identifier collided within the retry budget (503).
    #[error("Identifier space exhausted after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },

    /// Store transport or pool fault (503).
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::IdSpaceExhausted { .. } | AppError::Store(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    /// Converts the error into its client-visible payload.
    ///
    /// Store faults are reported without the underlying driver message.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::BadRequest { message, details } => ErrorInfo {
                code: "bad_request",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::IdSpaceExhausted { attempts } => ErrorInfo {
                code: "id_space_exhausted",
                message: "Could not allocate a unique short identifier".to_string(),
                details: json!({ "attempts": attempts }),
            },
            AppError::Store(_) => ErrorInfo {
                code: "store_unavailable",
                message: "Link store is unavailable".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        AppError::validation("Invalid URL", json!({ "reason": e.to_string() }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
