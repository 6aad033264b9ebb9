//! In-memory implementation of ProductRepository.
//!
//! The store is the sole owner of the product collection. A single
//! `RwLock` makes every mutation a critical section while reads hand
//! out cloned snapshots, so the query engine never observes a record
//! mid-update.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// In-memory product store backing the repository trait.
///
/// Insertion order is preserved, which is also the listing order.
/// Nothing survives a restart; that is by contract, not an oversight.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo catalog the service has
    /// always shipped with.
    pub fn with_samples() -> Self {
        let samples = vec![
            sample("Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
            sample("Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
            sample("Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
            sample("Desk Chair", "Ergonomic office chair", 200.0, "furniture", true),
            sample(
                "Wireless Headphones",
                "Noise-cancelling Bluetooth headphones",
                150.0,
                "electronics",
                true,
            ),
        ];

        Self {
            products: RwLock::new(samples),
        }
    }
}

fn sample(name: &str, description: &str, price: f64, category: &str, in_stock: bool) -> Product {
    Product {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self, input))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);
        let mut products = self.products.write().await;
        products.push(product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply_update(input);
            product.clone()
        }))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id);
        Ok(index.map(|i| products.remove(i)))
    }

    async fn count(&self) -> ProductResult<usize> {
        let products = self.products.read().await;
        Ok(products.len())
    }
}
