use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for the product store.
///
/// This trait defines the data access interface for products. The
/// canonical implementation is the in-memory store; tests use the
/// generated mock.
///
/// Not-found is signaled as `Ok(None)` so the service layer decides how
/// to surface it; validation never happens here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product from a validated payload, assigning its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Snapshot of all products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Merge a partial update into an existing product
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product, returning the removed record
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}
