//! Product storage capability
//!
//! Handlers only see this trait, so a Postgres-backed store and the
//! in-memory fake are interchangeable.

use async_trait::async_trait;

use crate::models::{NewProduct, Product};

/// Storage backend for products
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a product, returning it with the store-assigned `id` and `created`.
    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Every stored product, in whatever order the backend yields them.
    async fn get_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Error from a store operation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("error inserting product: {0}")]
    Insert(#[source] sqlx::Error),

    #[error("error fetching products: {0}")]
    Fetch(#[source] sqlx::Error),

    #[error("error scanning product: {0}")]
    Scan(#[source] sqlx::Error),

    /// Failure from a non-SQL backend
    #[error("{0}")]
    Backend(String),
}
