//! Products Domain
//!
//! In-memory product catalog: validation, storage, query views and the
//! HTTP handlers that expose them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (+ API-key gate on mutations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, orchestration
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼───┐ ┌─▼──────────┐
//! │Query │ │ Repository │  ← Pure read views / in-memory store
//! └──────┘ └────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::auth::ApiKeyAuth;
//! use core_config::AuthConfig;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_samples();
//! let service = ProductService::new(repository);
//! let auth = ApiKeyAuth::new(&AuthConfig::default());
//!
//! // Create Axum router
//! let router = handlers::router(service, auth);
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryProductRepository;
pub use models::{
    CatalogStats, CreateProduct, ListQuery, PriceStats, Product, ProductPage, SearchResults,
    UpdateProduct,
};
pub use repository::ProductRepository;
pub use service::ProductService;
