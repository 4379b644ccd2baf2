//! API error types with IntoResponse
//!
//! Errors become plain-text bodies. Store failures echo the underlying
//! error text to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded (400)
    BadRequest,

    /// Verb not served on this route (405)
    MethodNotAllowed,

    /// Store operation failed (500, logged)
    Store {
        action: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    pub fn creating(source: StoreError) -> Self {
        Self::Store {
            action: "creating product",
            source,
        }
    }

    pub fn fetching(source: StoreError) -> Self {
        Self::Store {
            action: "fetching products",
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest => (StatusCode::BAD_REQUEST, "bad request".to_owned()),
            Self::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_owned())
            }
            Self::Store { action, source } => {
                tracing::error!(error = %source, "error {}", action);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("error {}: {}", action, source),
                )
            }
        };

        (status, body).into_response()
    }
}
