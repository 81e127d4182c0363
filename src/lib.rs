#[cfg(feature = "http")]
pub mod http;
mod product;
mod service;
pub mod settings;
mod store;
pub mod telemetry;

pub use product::{
    FieldError, Product, ProductDraft, ProductFilter, ProductForm, ProductId, ValidationErrors,
};
pub use service::{ProductService, ServiceError};
pub use settings::Settings;
#[cfg(feature = "sqlite")]
pub use store::SqliteProductStore;
pub use store::{InMemoryProductStore, ProductStore, StoreError};
