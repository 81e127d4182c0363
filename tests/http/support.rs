//! Shared server and client setup for HTTP tests.

use std::sync::Arc;

use product_catalog::{http, InMemoryProductStore, ProductService, ProductStore};
use serde_json::{json, Value};

pub fn memory_service() -> Arc<ProductService<InMemoryProductStore>> {
    Arc::new(ProductService::new(InMemoryProductStore::new()))
}

/// Bind to port 0 and return the base URL.
pub async fn start_server<S: ProductStore + 'static>(service: Arc<ProductService<S>>) -> String {
    let app = http::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A client that does not follow redirects, so 303s can be asserted.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Create a product through the JSON API and return its body.
pub async fn create(client: &reqwest::Client, base: &str, name: &str, price: f64, in_stock: bool) -> Value {
    let resp = client
        .post(format!("{base}/product/api"))
        .json(&json!({
            "name": name,
            "description": format!("{name} description"),
            "price": price,
            "inStock": in_stock
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

pub async fn get_json(client: &reqwest::Client, url: String) -> (u16, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json().await.unwrap_or(Value::Null);
    (status, body)
}
