//! Error types for product service operations.

use thiserror::Error;

use crate::product::{ProductId, ValidationErrors};
use crate::store::StoreError;

/// Outcome of a rejected product operation.
///
/// Every variant is local to the call that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No product with this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),
    /// The addressed id is not an integer, so it names no product.
    #[error("product not found: '{0}' is not a product id")]
    UnknownId(String),
    /// Form fields failed validation.
    #[error("product not valid: {0}")]
    Validation(ValidationErrors),
    /// API payload was absent, null or unparseable.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Edit form declared a different id than the one addressed.
    #[error("id mismatch: path {path}, form {}", declared(.body))]
    IdentityMismatch {
        path: ProductId,
        body: Option<ProductId>,
    },
    /// The store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

fn declared(id: &Option<ProductId>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    ///
    /// An identity mismatch reads as not-found to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::UnknownId(_) => 404,
            ServiceError::Validation(_) => 400,
            ServiceError::BadRequest(_) => 400,
            ServiceError::IdentityMismatch { .. } => 404,
            ServiceError::Store(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }
}
