//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body decoded without looking at `Content-Type`.
///
/// Only the first JSON value is read; anything after it is ignored. An empty
/// body or any read or decode failure is a plain 400, unlike `axum::Json`
/// which splits failures across 400/415/422 and rejects trailing data.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            ApiError::BadRequest
        })?;

        let value = serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
            .ok_or_else(|| {
                tracing::debug!("rejecting empty request body");
                ApiError::BadRequest
            })?
            .map_err(|e| {
                tracing::debug!(error = %e, "rejecting malformed JSON body");
                ApiError::BadRequest
            })?;

        Ok(Self(value))
    }
}
