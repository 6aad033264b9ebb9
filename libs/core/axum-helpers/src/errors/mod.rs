pub mod handlers;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for all error responses, providing consistent error
/// information to clients:
/// - `error`: short error class (e.g., "Not Found")
/// - `message`: human-readable error message
/// - `details`: optional additional detail (e.g., the list of
///   validation violations)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Validation Error",
///   "message": "Validation failed",
///   "details": ["Name is required and must be a non-empty string"]
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Short error class for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation violations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this enum at the boundary; the
/// `IntoResponse` impl is the single place where errors become status
/// codes and response bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::info!("JSON extraction rejected: {:?}", e);
                // Body problems are client errors regardless of the
                // rejection's own status (serde type mismatches say 422)
                (
                    StatusCode::BAD_REQUEST,
                    "Bad Request".to_string(),
                    e.body_text(),
                    None,
                )
            }
            AppError::Validation(violations) => {
                tracing::info!("Validation failed: {:?}", violations);
                (
                    StatusCode::BAD_REQUEST,
                    "Validation Error".to_string(),
                    "Validation failed".to_string(),
                    Some(serde_json::json!(violations)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    "Bad Request".to_string(),
                    msg,
                    None,
                )
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized".to_string(),
                    msg,
                    None,
                )
            }
            AppError::Forbidden(msg) => {
                tracing::info!("Forbidden: {}", msg);
                (StatusCode::FORBIDDEN, "Forbidden".to_string(), msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found".to_string(), msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                    "Something went wrong".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error,
            message,
            details,
        });

        (status, body).into_response()
    }
}
