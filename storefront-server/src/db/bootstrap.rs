//! Table bootstrap for the products schema

use std::time::Duration;

use sqlx::PgPool;

use super::DbError;

/// Time allowed for the bootstrap statement at startup
pub const BOOTSTRAP_TIMEOUT: Duration = Duration::from_secs(10);

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        price NUMERIC(6, 2) NOT NULL,
        available BOOLEAN,
        created TIMESTAMP DEFAULT NOW()
    )
"#;

/// Create the `products` table if it does not exist.
///
/// Idempotent; safe to run on every startup.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), DbError> {
    ensure_products_table_within(pool, BOOTSTRAP_TIMEOUT).await
}

/// Same as [`ensure_products_table`] with an explicit deadline
pub async fn ensure_products_table_within(pool: &PgPool, limit: Duration) -> Result<(), DbError> {
    tracing::info!("Ensuring products table exists...");

    tokio::time::timeout(limit, sqlx::query(CREATE_PRODUCTS_TABLE).execute(pool))
        .await
        .map_err(|_| DbError::Timeout {
            operation: "products table bootstrap",
            after: limit,
        })?
        .map_err(DbError::Bootstrap)?;

    tracing::debug!("products table ready");
    Ok(())
}
