use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use product_catalog::{http, telemetry, InMemoryProductStore, ProductService, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    telemetry::init(&settings.log_filter);

    match settings.database_url.as_deref() {
        Some(url) => serve_sqlite(url, &settings.bind_addr).await,
        None => {
            info!("no database_url configured, using in-memory store");
            let service = Arc::new(ProductService::new(InMemoryProductStore::new()));
            http::serve(service, &settings.bind_addr)
                .await
                .context("serving http")
        }
    }
}

#[cfg(feature = "sqlite")]
async fn serve_sqlite(url: &str, bind_addr: &str) -> anyhow::Result<()> {
    use product_catalog::SqliteProductStore;

    let store = SqliteProductStore::connect(url)
        .await
        .with_context(|| format!("opening {url}"))?;
    store.migrate().await.context("creating products table")?;

    let service = Arc::new(ProductService::new(store));
    http::serve(service, bind_addr).await.context("serving http")
}

#[cfg(not(feature = "sqlite"))]
async fn serve_sqlite(_url: &str, _bind_addr: &str) -> anyhow::Result<()> {
    anyhow::bail!("database_url is set but this build has no sqlite support")
}
