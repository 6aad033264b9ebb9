//! JSON body extractor with structured rejections.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejection is an [`AppError`].
///
/// A malformed body or a wrong-type field (a string where a boolean
/// belongs) comes back as the standard [`crate::errors::ErrorResponse`]
/// envelope with status 400, instead of Axum's plain-text default.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create_user(JsonBody(payload): JsonBody<CreateUser>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        flag: bool,
    }

    async fn accept(JsonBody(payload): JsonBody<Payload>) -> String {
        payload.flag.to_string()
    }

    fn router() -> Router {
        Router::new().route("/", post(accept))
    }

    fn json_request(body: &str) -> HttpRequest<Body> {
        HttpRequest::post("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let response = router()
            .oneshot(json_request(r#"{"flag":true}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_type_field_is_structured_bad_request() {
        let response = router()
            .oneshot(json_request(r#"{"flag":"yes"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Bad Request");
        assert!(json["message"].as_str().unwrap().contains("flag"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_structured_bad_request() {
        let response = router().oneshot(json_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Bad Request");
    }
}
