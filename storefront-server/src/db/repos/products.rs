//! Product repository backed by PostgreSQL
//!
//! - create: INSERT ... RETURNING for the generated id and timestamp
//! - list: full-table scan, rows decoded one at a time

use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures::TryStreamExt;
use sqlx::{FromRow, PgPool};

use crate::db::store::{ProductStore, StoreError};
use crate::models::{NewProduct, Product};

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, price, available)
    VALUES ($1, $2::NUMERIC, $3)
    RETURNING id, price::FLOAT8 AS price, created
"#;

const SELECT_PRODUCTS: &str = r#"
    SELECT id, name, price::FLOAT8 AS price, available, created
    FROM products
"#;

/// Product row as stored. `created` is a zone-less TIMESTAMP holding UTC.
#[derive(Debug, Clone, FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: f64,
    available: Option<bool>,
    created: NaiveDateTime,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            available: row.available.unwrap_or(false),
            created: row.created.and_utc(),
        }
    }
}

/// Columns written back by the insert
#[derive(Debug, FromRow)]
struct Inserted {
    id: i32,
    price: f64,
    created: NaiveDateTime,
}

/// Product store over a sqlx pool
#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let inserted: Inserted = sqlx::query_as(INSERT_PRODUCT)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.available)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::Insert)?;

        tracing::debug!(id = inserted.id, name = %product.name, "product inserted");

        Ok(Product {
            id: inserted.id,
            name: product.name,
            price: inserted.price,
            available: product.available,
            created: inserted.created.and_utc(),
        })
    }

    async fn get_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut rows = sqlx::query(SELECT_PRODUCTS).fetch(&self.pool);

        let mut products = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(StoreError::Fetch)? {
            let row = ProductRow::from_row(&row).map_err(StoreError::Scan)?;
            products.push(Product::from(row));
        }

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bootstrap::ensure_products_table;

    #[test]
    fn row_with_null_availability_reads_as_unavailable() {
        let created = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap();
        let product = Product::from(ProductRow {
            id: 7,
            name: "Legacy".into(),
            price: 1.5,
            available: None,
            created,
        });

        assert!(!product.available);
        assert_eq!(product.created.to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p storefront-server -- --ignored

    async fn fresh_store() -> PgProductStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");
        ensure_products_table(&pool).await.expect("bootstrap failed");
        sqlx::query("TRUNCATE products RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("truncate failed");
        PgProductStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_assigns_increasing_ids() {
        let store = fresh_store().await;

        let first = store
            .create_product(NewProduct {
                name: "Widget".into(),
                price: 9.99,
                available: true,
            })
            .await
            .expect("insert failed");
        let second = store
            .create_product(NewProduct {
                name: "Gadget".into(),
                price: 19.5,
                available: false,
            })
            .await
            .expect("insert failed");

        assert_eq!(first.id, 1);
        assert!(second.id > first.id);
        assert_eq!(first.price, 9.99);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_returns_every_row() {
        let store = fresh_store().await;
        assert!(store.get_products().await.expect("list failed").is_empty());

        for i in 0..3 {
            store
                .create_product(NewProduct {
                    name: format!("item-{i}"),
                    price: 1.25 * f64::from(i),
                    available: i % 2 == 0,
                })
                .await
                .expect("insert failed");
        }

        let products = store.get_products().await.expect("list failed");
        assert_eq!(products.len(), 3);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn overlong_name_is_an_insert_error() {
        let store = fresh_store().await;

        let err = store
            .create_product(NewProduct {
                name: "x".repeat(101),
                price: 1.0,
                available: true,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Insert(_)));
        assert!(store.get_products().await.expect("list failed").is_empty());
    }
}
