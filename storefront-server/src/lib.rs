//! storefront-server: product catalog HTTP server
//!
//! Exposes create/list operations over a single `products` table.
//! The library is split into:
//! - `config`: database connection settings read from the environment
//! - `models`: the product record and its request/decode shapes
//! - `db`: pool setup, table bootstrap, and the `ProductStore` capability
//! - `http`: axum router, handlers, and error responses

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{MemoryProductStore, PgProductStore, ProductStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{NewProduct, Product, ProductRequest};
