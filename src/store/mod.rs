//! ProductStore - Abstract persistence for products.
//!
//! The store owns the durable collection: it assigns ids, evaluates filters
//! and provides whatever isolation concurrent writers get. Each write method
//! is a single commit.
//!
//! ## Example
//!
//! ```ignore
//! use product_catalog::{InMemoryProductStore, ProductDraft, ProductFilter, ProductStore};
//!
//! let store = InMemoryProductStore::new();
//! let pen = store.insert(ProductDraft::new("Pen", "Blue ink", 1.5, true)).await?;
//! let in_stock = store.find(ProductFilter::InStock(true)).await?;
//! ```

mod in_memory;
#[cfg(feature = "sqlite")]
mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::product::{Product, ProductDraft, ProductFilter, ProductId};

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteProductStore;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[cfg(feature = "sqlite")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Abstract CRUD storage for products.
///
/// Listing methods return products in ascending id order.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Products matching a filter.
    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Get a product by id. Returns None if not found.
    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Insert a new product and return it with its assigned id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Overwrite the stored row with the same id. Returns false if no such row.
    async fn update(&self, product: &Product) -> Result<bool, StoreError>;

    /// Delete a product by id. Returns true if it existed.
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError>;
}
