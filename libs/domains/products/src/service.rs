//! Product Service - business logic layer
//!
//! Orchestrates the validator, the store and the query engine. All
//! reads work on snapshots handed out by the repository; mutations go
//! through it one at a time.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CatalogStats, CreateProduct, ListQuery, Product, ProductPage, SearchResults, UpdateProduct,
};
use crate::query;
use crate::repository::ProductRepository;
use crate::validation::{validate_create, validate_update};

/// Product service providing the catalog operations.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product from a validated payload
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let violations = validate_create(&input);
        if !violations.is_empty() {
            return Err(ProductError::Validation(violations));
        }

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// List products, filtered and paginated
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> ProductResult<ProductPage> {
        let snapshot = self.repository.list().await?;
        Ok(query::filter_and_paginate(&snapshot, &query))
    }

    /// Free-text search over name and description
    #[instrument(skip(self))]
    pub async fn search_products(&self, q: &str) -> ProductResult<SearchResults> {
        let snapshot = self.repository.list().await?;
        query::search(&snapshot, q)
    }

    /// Aggregate statistics over the whole catalog
    #[instrument(skip(self))]
    pub async fn product_stats(&self) -> ProductResult<CatalogStats> {
        let snapshot = self.repository.list().await?;
        Ok(query::stats(&snapshot))
    }

    /// Partially update an existing product
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let violations = validate_update(&input);
        if !violations.is_empty() {
            return Err(ProductError::Validation(violations));
        }

        self.repository
            .update(id, input)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Delete a product, returning the removed record
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
