//! Health endpoint shared by the workspace services.

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response reporting the running service and its version.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

async fn health(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: app.name.to_string(),
        version: app.version.to_string(),
    })
}

/// Router exposing `GET /health`, reporting the app name and version
/// from [`AppInfo`].
///
/// # Example
/// ```ignore
/// use core_config::app_info;
///
/// let app = my_routes().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(app_info)
}
