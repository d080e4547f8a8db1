//! Database seeding and HTTP server commands.

use crate::catalog::{seed, SqliteCatalog};
use crate::config::Config;
use crate::server::{self, AppState};
use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Creates the catalog database and loads the sample products.
pub struct SeedCommand {
    config: Config,
}

impl SeedCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Seeds the configured database and returns a summary line.
    pub async fn execute(&self) -> Result<String> {
        let path = &self.config.database;
        let catalog = SqliteCatalog::create(path)
            .await
            .with_context(|| format!("Failed to create database {}", path.display()))?;

        let count = seed::seed(&catalog).await?;
        Ok(format!("Seeded {} products into {}", count, path.display()))
    }
}

/// Serves the local catalog over HTTP.
pub struct ServeCommand {
    config: Config,
}

impl ServeCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the server until Ctrl-C.
    pub async fn execute(&self) -> Result<()> {
        if self.config.api_url.is_some() {
            warn!("api_url is ignored when serving; reading the local database");
        }

        let path = &self.config.database;
        let catalog = SqliteCatalog::open(path).await.with_context(|| {
            format!(
                "Failed to open catalog database {} (run `price-compare seed` first)",
                path.display()
            )
        })?;

        let shutdown = async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
            }
        };

        self.execute_with_catalog(Arc::new(catalog), shutdown).await
    }

    /// Binds the configured address and serves `catalog` until `shutdown` resolves.
    pub async fn execute_with_catalog(
        &self,
        catalog: AppState,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener =
            TcpListener::bind(&addr).await.with_context(|| format!("Failed to bind {}", addr))?;

        server::serve(listener, catalog, shutdown).await
    }
}
