//! Shared-secret API-key gate.
//!
//! Mutating routes are protected by a single configured secret supplied
//! in the `x-api-key` request header. A missing header is distinct from
//! a wrong value: the former is 401 Unauthorized, the latter 403
//! Forbidden.

use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use core_config::AuthConfig;

use crate::errors::AppError;

/// Header carrying the caller's credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// State for [`require_api_key`], holding the configured secret.
#[derive(Clone)]
pub struct ApiKeyAuth {
    key: String,
}

impl ApiKeyAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: config.api_key.clone(),
        }
    }
}

/// Middleware enforcing the API-key gate.
///
/// Attach with `axum::middleware::from_fn_with_state(auth, require_api_key)`
/// as a `route_layer` so it only guards the routes it is mounted on.
pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match request.headers().get(API_KEY_HEADER) {
        None => Err(AppError::Unauthorized(format!(
            "API key is required in {} header",
            API_KEY_HEADER
        ))),
        Some(supplied) if supplied.as_bytes() == auth.key.as_bytes() => Ok(next.run(request).await),
        Some(_) => Err(AppError::Forbidden("Invalid API key".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::post};
    use tower::ServiceExt;

    fn protected_router(secret: &str) -> Router {
        let auth = ApiKeyAuth {
            key: secret.to_string(),
        };
        Router::new()
            .route("/guarded", post(|| async { "ok" }))
            .route_layer(axum::middleware::from_fn_with_state(auth, require_api_key))
    }

    #[tokio::test]
    async fn test_missing_key_is_unauthorized() {
        let app = protected_router("secret-key-123");
        let request = HttpRequest::post("/guarded").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_key_is_forbidden() {
        let app = protected_router("secret-key-123");
        let request = HttpRequest::post("/guarded")
            .header(API_KEY_HEADER, "nope")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_matching_key_passes_through() {
        let app = protected_router("secret-key-123");
        let request = HttpRequest::post("/guarded")
            .header(API_KEY_HEADER, "secret-key-123")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
