//! Products API routes

use axum::Router;
use axum_helpers::auth::ApiKeyAuth;
use domain_products::{handlers, InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Create the products router backed by the seeded in-memory store
pub fn router(config: &Config) -> Router {
    let repository = InMemoryProductRepository::with_samples();
    let service = ProductService::new(repository);
    let auth = ApiKeyAuth::new(&config.auth);
    handlers::router(service, auth)
}
