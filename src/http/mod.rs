//! HTTP transport: maps product routes onto `ProductService`.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! Views (HTML, post/redirect/get):
//!
//! - `GET /product`, `GET /product/:id`
//! - `GET|POST /product/create`
//! - `GET|POST /product/edit/:id`
//! - `GET|POST /product/delete/:id`
//!
//! JSON API:
//!
//! - `GET|POST /product/api`
//! - `GET /product/api/em-stock/:status`
//! - `GET /product/api/acima-preco/:min_price`
//! - `GET|PUT|DELETE /product/api/:id`
//!
//! Plus `GET /health` returning `{ "ok": true }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use product_catalog::{http, InMemoryProductStore, ProductService};
//!
//! let service = Arc::new(ProductService::new(InMemoryProductStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone());
//!
//! // Or serve directly
//! http::serve(service, "0.0.0.0:3000").await?;
//! ```

mod api;
mod extract;
mod pages;
mod views;

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{info, warn};

use crate::service::ProductService;
use crate::store::ProductStore;

pub use api::{ApiError, DELETED_MESSAGE};
pub use views::{ViewOutcome, INVALID_PRODUCT_MESSAGE};

/// Build an axum `Router` serving both product surfaces over the given service.
pub fn router<S: ProductStore + 'static>(service: Arc<ProductService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/product", get(views::index::<S>))
        .route(
            "/product/create",
            get(views::create_form).post(views::create::<S>),
        )
        .route(
            "/product/edit/:id",
            get(views::edit_form::<S>).post(views::edit::<S>),
        )
        .route(
            "/product/delete/:id",
            get(views::delete_confirm::<S>).post(views::delete::<S>),
        )
        .route("/product/api", get(api::list::<S>).post(api::create::<S>))
        .route("/product/api/em-stock/:status", get(api::by_stock::<S>))
        .route(
            "/product/api/acima-preco/:min_price",
            get(api::above_price::<S>),
        )
        .route(
            "/product/api/:id",
            get(api::get_one::<S>)
                .put(api::replace::<S>)
                .delete(api::delete::<S>),
        )
        .route("/product/:id", get(views::details::<S>))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"0.0.0.0:3000"`).
///
/// Runs until Ctrl-C.
pub async fn serve<S: ProductStore + 'static>(
    service: Arc<ProductService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            warn!(error = %e, "could not install ctrl-c handler");
            std::future::pending::<()>().await;
        }
    }
}

/// `GET /health`: returns `{ "ok": true }`.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}
