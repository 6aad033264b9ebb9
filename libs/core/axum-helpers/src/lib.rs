//! # Axum Helpers
//!
//! A collection of utilities and middleware shared by the Axum services
//! in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: shared-secret API-key gate for mutating routes
//! - **[`server`]**: server setup, health endpoint, graceful shutdown
//! - **[`errors`]**: structured error responses
//! - **[`extractors`]**: request extractors with structured rejections

// Domain modules
pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{API_KEY_HEADER, ApiKeyAuth, require_api_key};

// Re-export extractors
pub use extractors::JsonBody;

// Re-export server types
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

// Re-export error types
pub use errors::{AppError, ErrorResponse};
