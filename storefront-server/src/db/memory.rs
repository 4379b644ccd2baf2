//! In-memory product store for tests and local runs without Postgres

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::db::store::{ProductStore, StoreError};
use crate::models::product::round_price;
use crate::models::{NewProduct, Product};

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    next_id: i32,
    failure: Option<String>,
}

/// Mock product store
///
/// Assigns ids from 1 upward and stamps `created` with the current time,
/// matching what the `products` table does.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following operation fail with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Clear an injected failure
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.lock();
        if let Some(message) = &inner.failure {
            return Err(StoreError::Backend(format!("error inserting product: {message}")));
        }

        inner.next_id += 1;
        let stored = Product {
            id: inner.next_id,
            name: product.name,
            price: round_price(product.price),
            available: product.available,
            created: Utc::now(),
        };
        inner.products.push(stored.clone());

        Ok(stored)
    }

    async fn get_products(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.lock();
        if let Some(message) = &inner.failure {
            return Err(StoreError::Backend(format!("error fetching products: {message}")));
        }

        Ok(inner.products.clone())
    }
}
