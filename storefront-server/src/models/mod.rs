//! Domain models
//!
//! `ProductRequest` is what clients send, `NewProduct` is what gets
//! stored, `Product` is what the store hands back.

pub mod product;

pub use product::{NewProduct, Product, ProductRequest};
