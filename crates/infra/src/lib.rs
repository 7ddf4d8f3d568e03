//! Infrastructure layer: catalog persistence and configuration.

pub mod catalog_store;
pub mod config;
pub mod product_store;

pub use catalog_store::{CatalogError, CatalogStore, InMemoryCatalog, JsonFileCatalog};
pub use config::{AppConfig, ConfigError, load_app_config_from_env};
pub use product_store::{ProductStore, StoreError};
