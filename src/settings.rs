//! Runtime settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `catalog.toml` in the working directory, then `CATALOG_*` environment
//! variables (`CATALOG_BIND_ADDR`, `CATALOG_DATABASE_URL`, `CATALOG_LOG_FILTER`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const FILE_NAME: &str = "catalog";
const ENV_PREFIX: &str = "CATALOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// SQLite URL. Without one the catalog lives in memory.
    #[serde(default)]
    pub database_url: Option<String>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Settings {
    /// A builder preloaded with defaults. Callers add sources on top.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("bind_addr", "127.0.0.1:3000")?
            .set_default("log_filter", "info")
    }

    /// Load from defaults, the optional settings file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(FILE_NAME).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}
