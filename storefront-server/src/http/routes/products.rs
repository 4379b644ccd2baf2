//! Product endpoints
//!
//! `GET /products` lists, `POST /products` creates, anything else is 405.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{NewProduct, Product, ProductRequest};

/// Caching and cross-origin headers sent with the product list.
///
/// Any origin, credentials allowed, preflight cached for 24 hours.
fn list_headers() -> [(HeaderName, &'static str); 9] {
    [
        (header::CACHE_CONTROL, "no-store"),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET, POST, PUT, DELETE, OPTIONS",
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token",
        ),
        (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
        (header::ACCESS_CONTROL_EXPOSE_HEADERS, "Content-Length"),
        (header::ACCESS_CONTROL_MAX_AGE, "86400"),
    ]
}

/// GET /products - list every product
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = state
        .store
        .get_products()
        .await
        .map_err(ApiError::fetching)?;

    tracing::debug!(count = products.len(), "listed products");
    Ok((list_headers(), Json(products)))
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state
        .store
        .create_product(NewProduct::from(req))
        .await
        .map_err(ApiError::creating)?;

    tracing::info!(id = product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    // HEAD is routed explicitly; axum would otherwise serve it from the GET handler.
    Router::new().route(
        "/products",
        get(list_products)
            .head(method_not_allowed)
            .post(create_product)
            .fallback(method_not_allowed),
    )
}
