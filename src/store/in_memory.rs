//! InMemoryProductStore - BTreeMap-backed store for testing and development.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{ProductStore, StoreError};
use crate::product::{Product, ProductDraft, ProductFilter, ProductId};

struct Table {
    rows: BTreeMap<ProductId, Product>,
    next_id: ProductId,
}

/// In-memory product store.
///
/// Ids start at 1 and are never reused, even after deletes. Clone-friendly
/// via Arc: clones share the same table.
#[derive(Clone)]
pub struct InMemoryProductStore {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored products.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.read_rows("len", |rows| rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.read_rows("is_empty", |rows| rows.is_empty())
    }

    fn read_rows<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&BTreeMap<ProductId, Product>) -> T,
    ) -> Result<T, StoreError> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))?;
        Ok(f(&table.rows))
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.read_rows("list", |rows| rows.values().cloned().collect())
    }

    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        self.read_rows("find", |rows| {
            rows.values()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect()
        })
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.read_rows("get", |rows| rows.get(&id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        let id = table.next_id;
        table.next_id += 1;

        let product = draft.with_id(id);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<bool, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        match table.rows.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        Ok(table.rows.remove(&id).is_some())
    }
}
