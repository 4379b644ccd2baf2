//! Database layer - connection pool, bootstrap, and product stores
//!
//! - Bounded pool (25 connections, 5 minute lifetime), no Arc<Mutex<Connection>>
//! - Startup operations run under fixed timeouts
//! - Request-path queries are cancelled with the request future, no retries

pub mod bootstrap;
pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

use std::time::Duration;

pub use sqlx::PgPool;

pub use bootstrap::ensure_products_table;
pub use memory::MemoryProductStore;
pub use pool::{create_pool, PoolSettings};
pub use repos::PgProductStore;
pub use store::{ProductStore, StoreError};

/// Startup database error
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("error opening database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("error pinging database: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("error creating products table: {0}")]
    Bootstrap(#[source] sqlx::Error),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}
