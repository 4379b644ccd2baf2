//! Product record and its create-request shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored product.
///
/// `id` and `created` are assigned by the store on insertion and are never
/// taken from client input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created: DateTime<Utc>,
}

/// Request body for `POST /products`
///
/// Absent fields take their zero value: empty name, zero price, unavailable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub available: bool,
}

/// Client-controlled fields of a product, ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub available: bool,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            price: req.price,
            available: req.available,
        }
    }
}

/// Round a price to the two fractional digits the `NUMERIC(6,2)` column keeps
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}
