//! Catalog browsing commands: listing with search and category filters.

use super::open_catalog;
use crate::catalog::CatalogSource;
use crate::config::Config;
use crate::filters::{Category, FilterChainBuilder};
use crate::format::Formatter;
use anyhow::Result;
use tracing::{debug, info};

/// Filters applied to a listing.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub query: Option<String>,
    pub category: Option<Category>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Lists catalog products.
pub struct ListCommand {
    config: Config,
    options: ListOptions,
}

impl ListCommand {
    pub fn new(config: Config, options: ListOptions) -> Self {
        Self { config, options }
    }

    /// Executes the listing and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let catalog = open_catalog(&self.config).await?;
        self.execute_with_catalog(catalog.as_ref()).await
    }

    /// Executes the listing against a provided catalog (for testing).
    pub async fn execute_with_catalog(&self, catalog: &dyn CatalogSource) -> Result<String> {
        let products = catalog.all_products().await?;

        let filters = FilterChainBuilder::new()
            .query(self.options.query.as_deref())
            .category(self.options.category)
            .price_range(self.options.min_price, self.options.max_price)
            .build();

        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let total = products.len();
        let products = filters.apply(products);
        info!("{} of {} products match", products.len(), total);

        Ok(Formatter::new(self.config.format).format_products(&products))
    }
}

/// Lists category labels with product counts.
pub struct CategoriesCommand {
    config: Config,
}

impl CategoriesCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> Result<String> {
        let catalog = open_catalog(&self.config).await?;
        self.execute_with_catalog(catalog.as_ref()).await
    }

    pub async fn execute_with_catalog(&self, catalog: &dyn CatalogSource) -> Result<String> {
        let products = catalog.all_products().await?;

        let counts: Vec<(Category, usize)> = Category::all()
            .iter()
            .map(|c| (*c, products.iter().filter(|p| Category::of(p) == *c).count()))
            .collect();

        Ok(Formatter::new(self.config.format).format_categories(&counts))
    }
}
