//! Product Service: one store operation per request.
//!
//! `ProductService<S>` is constructed with an explicit store handle and holds
//! no other state. Each method translates one request into a single store
//! call (plus an existence check where the operation needs one) and returns
//! the result or a typed `ServiceError`.
//!
//! Two entry shapes exist for writes:
//!
//! - form-bound (`*_from_form`): validates the submitted fields first, and on
//!   edit rejects a form whose declared id disagrees with the addressed id;
//! - API-bound (`*_from_payload`): a missing body is a bad request, and any id
//!   inside the body is ignored in favour of the addressed id.
//!
//! ## Quick Start
//!
//! ```ignore
//! use product_catalog::{InMemoryProductStore, ProductDraft, ProductService};
//!
//! let service = ProductService::new(InMemoryProductStore::new());
//! let pen = service.create(ProductDraft::new("Pen", "Blue ink", 1.5, true)).await?;
//! let same = service.get_by_id(pen.id).await?;
//! service.delete(pen.id).await?;
//! ```

mod error;

use tracing::{info, instrument, warn};

use crate::product::{Product, ProductDraft, ProductFilter, ProductForm, ProductId};
use crate::store::ProductStore;

pub use error::ServiceError;

/// Request handler over a product store.
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All products, in store order.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// One product, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Products whose stock flag equals `status`.
    #[instrument(skip(self))]
    pub async fn list_by_stock(&self, status: bool) -> Result<Vec<Product>, ServiceError> {
        Ok(self.store.find(ProductFilter::InStock(status)).await?)
    }

    /// Products priced at `min_price` or above.
    #[instrument(skip(self))]
    pub async fn list_by_min_price(&self, min_price: f64) -> Result<Vec<Product>, ServiceError> {
        Ok(self.store.find(ProductFilter::MinPrice(min_price)).await?)
    }

    /// Persist a new product. The store assigns its id.
    #[instrument(skip(self))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ServiceError> {
        let product = self.store.insert(draft).await?;
        info!(id = product.id, "product created");
        Ok(product)
    }

    /// Validate a submitted form, then create.
    #[instrument(skip(self, form))]
    pub async fn create_from_form(&self, form: &ProductForm) -> Result<Product, ServiceError> {
        let draft = form.validate().map_err(|errors| {
            warn!(%errors, "rejected product form");
            ServiceError::Validation(errors)
        })?;
        self.create(draft).await
    }

    /// Create from an API body. A missing body is a bad request.
    #[instrument(skip(self, payload))]
    pub async fn create_from_payload(
        &self,
        payload: Option<ProductDraft>,
    ) -> Result<Product, ServiceError> {
        let draft = payload.ok_or_else(missing_payload)?;
        self.create(draft).await
    }

    /// Overwrite the mutable fields of an existing product.
    #[instrument(skip(self))]
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, ServiceError> {
        let existing = self.get_by_id(id).await?;
        self.overwrite(existing, draft).await
    }

    /// Edit through a submitted form.
    ///
    /// A form that supplies an id must supply the one addressed; a mismatch is
    /// rejected before validation and nothing is written. A form without an id
    /// edits the addressed product.
    #[instrument(skip(self, form))]
    pub async fn update_from_form(
        &self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<Product, ServiceError> {
        let declared = form.declared_id();
        if form.supplies_id() && declared != Some(id) {
            warn!(path = id, form = ?declared, "product id mismatch");
            return Err(ServiceError::IdentityMismatch {
                path: id,
                body: declared,
            });
        }

        let draft = form.validate().map_err(|errors| {
            warn!(%errors, "rejected product form");
            ServiceError::Validation(errors)
        })?;
        self.update(id, draft).await
    }

    /// Replace through an API body.
    ///
    /// Existence is checked before the body: a missing product is `NotFound`
    /// even when the body is also missing. Any id in the body is ignored.
    #[instrument(skip(self, payload))]
    pub async fn update_from_payload(
        &self,
        id: ProductId,
        payload: Option<ProductDraft>,
    ) -> Result<Product, ServiceError> {
        let existing = self.get_by_id(id).await?;
        let draft = payload.ok_or_else(missing_payload)?;
        self.overwrite(existing, draft).await
    }

    /// Permanently remove a product and return what was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, ServiceError> {
        let existing = self.get_by_id(id).await?;
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "product deleted");
        Ok(existing)
    }

    async fn overwrite(
        &self,
        mut product: Product,
        draft: ProductDraft,
    ) -> Result<Product, ServiceError> {
        product.overwrite(draft);
        // The row can vanish between the read and the write.
        if !self.store.update(&product).await? {
            return Err(ServiceError::NotFound(product.id));
        }
        info!(id = product.id, "product updated");
        Ok(product)
    }
}

fn missing_payload() -> ServiceError {
    warn!("missing or unreadable product payload");
    ServiceError::BadRequest("missing or unreadable product payload".into())
}
