//! Repository implementations for database access
//!
//! - One statement per operation, no check-then-insert
//! - Rows decode through `FromRow` structs, converted to domain models

pub mod products;

pub use products::PgProductStore;
