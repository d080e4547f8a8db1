//! CLI command implementations.

pub mod compare;
pub mod list;
pub mod product;
pub mod server;

use crate::catalog::{CatalogSource, RemoteCatalog, SqliteCatalog};
use crate::config::Config;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

pub use compare::CompareCommand;
pub use list::{CategoriesCommand, ListCommand, ListOptions};
pub use product::ProductCommand;
pub use server::{SeedCommand, ServeCommand};

/// Opens the catalog the client commands read from: the remote endpoint when
/// `api_url` is configured, the local database otherwise.
pub async fn open_catalog(config: &Config) -> Result<Box<dyn CatalogSource>> {
    match &config.api_url {
        Some(url) => {
            debug!("Reading catalog from {}", url);
            let remote = RemoteCatalog::new(url.clone(), Duration::from_secs(config.timeout_secs))
                .context("Failed to create HTTP client")?;
            Ok(Box::new(remote))
        }
        None => {
            debug!("Reading catalog from {}", config.database.display());
            let store = SqliteCatalog::open(&config.database).await.with_context(|| {
                format!(
                    "Failed to open catalog database {} (run `price-compare seed` first)",
                    config.database.display()
                )
            })?;
            Ok(Box::new(store))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::catalog::{CatalogSource, Product};
    use crate::config::{Config, OutputFormat};
    use crate::error::{CatalogError, Result};
    use async_trait::async_trait;

    /// Mock catalog for testing.
    pub struct MockCatalog {
        products: Vec<Product>,
        should_fail: bool,
    }

    impl MockCatalog {
        pub fn new(products: Vec<Product>) -> Self {
            Self { products, should_fail: false }
        }

        pub fn failing() -> Self {
            Self { products: Vec::new(), should_fail: true }
        }
    }

    #[async_trait]
    impl CatalogSource for MockCatalog {
        async fn all_products(&self) -> Result<Vec<Product>> {
            if self.should_fail {
                Err(CatalogError::unavailable("Simulated network error"))
            } else {
                Ok(self.products.clone())
            }
        }
    }

    pub fn make_test_config(format: OutputFormat) -> Config {
        Config { format, ..Config::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_catalog_missing_database() {
        let dir = TempDir::new().unwrap();
        let config = Config { database: dir.path().join("absent.db"), ..Config::default() };

        let err = open_catalog(&config).await.err().unwrap();
        assert!(err.to_string().contains("price-compare seed"));
    }

    #[tokio::test]
    async fn test_open_catalog_remote() {
        let config =
            Config { api_url: Some("http://127.0.0.1:5000".to_string()), ..Config::default() };
        assert!(open_catalog(&config).await.is_ok());
    }
}
