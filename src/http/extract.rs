//! Extractors for the `:id` path segment.
//!
//! A segment that is not an integer names no product, so it is rejected as
//! not-found in the shape of the surface that received it.

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::{ApiError, ViewOutcome};
use crate::product::ProductId;
use crate::service::ServiceError;

/// Product id on the JSON surface; rejects with a JSON error body.
#[derive(Debug, Clone, Copy)]
pub(super) struct ApiProductId(pub ProductId);

/// Product id on the HTML surface; rejects with the not-found page.
#[derive(Debug, Clone, Copy)]
pub(super) struct ViewProductId(pub ProductId);

#[async_trait]
impl<St: Send + Sync> FromRequestParts<St> for ApiProductId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &St) -> Result<Self, Self::Rejection> {
        product_id(parts, state).await.map(Self).map_err(ApiError)
    }
}

#[async_trait]
impl<St: Send + Sync> FromRequestParts<St> for ViewProductId {
    type Rejection = ViewOutcome;

    async fn from_request_parts(parts: &mut Parts, state: &St) -> Result<Self, Self::Rejection> {
        product_id(parts, state)
            .await
            .map(Self)
            .map_err(ViewOutcome::from)
    }
}

async fn product_id<St: Send + Sync>(
    parts: &mut Parts,
    state: &St,
) -> Result<ProductId, ServiceError> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
    parse_product_id(&raw)
}

fn parse_product_id(raw: &str) -> Result<ProductId, ServiceError> {
    raw.trim()
        .parse()
        .map_err(|_| ServiceError::UnknownId(raw.to_string()))
}
