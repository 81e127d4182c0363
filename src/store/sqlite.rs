//! SqliteProductStore - sqlx-backed store over a single `products` table.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use super::{ProductStore, StoreError};
use crate::product::{Product, ProductDraft, ProductFilter, ProductId};

const COLUMNS: &str = "id, name, description, price, in_stock";

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price REAL NOT NULL,
        in_stock BOOLEAN NOT NULL DEFAULT 0
    )
"#;

/// SQLite product store.
///
/// Id assignment and write isolation are delegated to SQLite. Clone-friendly:
/// clones share the connection pool.
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Open a pool for `database_url`, creating the database file if missing.
    ///
    /// An in-memory database lives only as long as its connection, so those
    /// get a single connection that is never recycled.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        debug!(database_url, "opened sqlite pool");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for sharing with other queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `products` table if it does not exist.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await?;
        info!("products table ready");
        Ok(())
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn find(&self, filter: ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products = match filter {
            ProductFilter::InStock(status) => {
                let sql = format!("SELECT {COLUMNS} FROM products WHERE in_stock = ? ORDER BY id");
                sqlx::query_as::<_, Product>(&sql)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            ProductFilter::MinPrice(min_price) => {
                let sql = format!("SELECT {COLUMNS} FROM products WHERE price >= ? ORDER BY id");
                sqlx::query_as::<_, Product>(&sql)
                    .bind(min_price)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(products)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = ?");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO products (name, description, price, in_stock) VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(draft.name)
            .bind(draft.description)
            .bind(draft.price)
            .bind(draft.in_stock)
            .fetch_one(&self.pool)
            .await?;
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, in_stock = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.in_stock)
        .bind(product.id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
