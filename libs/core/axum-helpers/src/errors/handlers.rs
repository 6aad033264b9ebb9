use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback handler for unmatched routes.
///
/// Echoes the requested path so clients can spot typos in their URLs.
pub async fn not_found(uri: Uri) -> Response {
    let body = Json(ErrorResponse {
        error: "Route not found".to_string(),
        message: format!("The route {} does not exist", uri.path()),
        details: None,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(ErrorResponse {
        error: "Method Not Allowed".to_string(),
        message: "The HTTP method is not allowed for this resource".to_string(),
        details: None,
    });

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}
