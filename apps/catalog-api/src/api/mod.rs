//! API routes module

pub mod products;
pub mod root;

use axum::Router;

use crate::config::Config;

/// Create the API routes nested under `/api` by the server bootstrap
pub fn routes(config: &Config) -> Router {
    Router::new().nest("/products", products::router(config))
}
