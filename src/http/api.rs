//! JSON API handlers under `/product/api`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use super::extract::ApiProductId;
use crate::product::{Product, ProductDraft};
use crate::service::{ProductService, ServiceError};
use crate::store::ProductStore;

/// Body returned by a successful `DELETE /product/api/:id`.
pub const DELETED_MESSAGE: &str = "Produto eliminado!";

type Service<S> = State<Arc<ProductService<S>>>;

/// A service error rendered as `{ "error": "..." }` with its status code.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "product api request failed");
        }
        let body = json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// `GET /product/api`: every product.
pub(super) async fn list<S: ProductStore>(
    State(service): Service<S>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service.list_all().await?))
}

/// `GET /product/api/em-stock/:status`: products by stock flag.
pub(super) async fn by_stock<S: ProductStore>(
    State(service): Service<S>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let status = parse_flag(&status).ok_or_else(|| {
        ServiceError::BadRequest(format!("'{}' is not a valid stock status", status))
    })?;
    Ok(Json(service.list_by_stock(status).await?))
}

/// `GET /product/api/acima-preco/:min_price`: products at or above a price.
pub(super) async fn above_price<S: ProductStore>(
    State(service): Service<S>,
    Path(min_price): Path<String>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let min_price: f64 = min_price.trim().parse().map_err(|_| {
        ServiceError::BadRequest(format!("'{}' is not a valid price", min_price))
    })?;
    Ok(Json(service.list_by_min_price(min_price).await?))
}

/// `GET /product/api/:id`: one product.
pub(super) async fn get_one<S: ProductStore>(
    State(service): Service<S>,
    ApiProductId(id): ApiProductId,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.get_by_id(id).await?))
}

/// `POST /product/api`: create from the body; 201 with a `Location` header.
pub(super) async fn create<S: ProductStore>(
    State(service): Service<S>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let product = service
        .create_from_payload(ProductDraft::from_json_body(&body))
        .await?;
    let location = format!("/product/api/{}", product.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(product)).into_response())
}

/// `PUT /product/api/:id`: replace the mutable fields.
pub(super) async fn replace<S: ProductStore>(
    State(service): Service<S>,
    ApiProductId(id): ApiProductId,
    body: Bytes,
) -> Result<Json<Product>, ApiError> {
    let product = service
        .update_from_payload(id, ProductDraft::from_json_body(&body))
        .await?;
    Ok(Json(product))
}

/// `DELETE /product/api/:id`.
pub(super) async fn delete<S: ProductStore>(
    State(service): Service<S>,
    ApiProductId(id): ApiProductId,
) -> Result<&'static str, ApiError> {
    service.delete(id).await?;
    Ok(DELETED_MESSAGE)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
