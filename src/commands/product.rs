//! Product detail command implementation.

use super::open_catalog;
use crate::catalog::{CatalogSource, Product};
use crate::config::{Config, OutputFormat};
use crate::format::Formatter;
use anyhow::Result;
use tracing::{info, warn};

/// Shows full details for products by id.
pub struct ProductCommand {
    config: Config,
}

impl ProductCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Looks up products and returns formatted output.
    pub async fn execute(&self, ids: &[String]) -> Result<String> {
        let catalog = open_catalog(&self.config).await?;
        self.execute_with_catalog(catalog.as_ref(), ids).await
    }

    /// Looks up products against a provided catalog (for testing).
    ///
    /// A single id must exist; with several, unknown ids are skipped.
    pub async fn execute_with_catalog(
        &self,
        catalog: &dyn CatalogSource,
        ids: &[String],
    ) -> Result<String> {
        let products = catalog.all_products().await?;
        let formatter = Formatter::new(self.config.format);

        if let [id] = ids {
            let id = id.trim();
            info!("Looking up product: {}", id);

            let product = products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| anyhow::anyhow!("Product not found: '{}'", id))?;
            return Ok(formatter.format_product(product));
        }

        let mut found: Vec<Product> = Vec::new();
        for id in ids {
            let id = id.trim();
            match products.iter().find(|p| p.id == id) {
                Some(product) => found.push(product.clone()),
                None => warn!("Skipping unknown product id: {}", id),
            }
        }

        Ok(match self.config.format {
            OutputFormat::Table => found
                .iter()
                .map(|p| formatter.format_product(p))
                .collect::<Vec<_>>()
                .join("\n\n"),
            _ => formatter.format_products(&found),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;
    use crate::commands::testing::{make_test_config, MockCatalog};

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_product_command_basic() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Table));

        let output = cmd.execute_with_catalog(&catalog, &ids(&["canon-r50"])).await.unwrap();
        assert!(output.contains("Canon EOS R50 Mirrorless Camera"));
        assert!(output.contains("Category:  Camera"));
        assert!(output.contains("  - 24.2 MP APS-C CMOS sensor"));
    }

    #[tokio::test]
    async fn test_product_command_id_trimmed() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Table));

        let result = cmd.execute_with_catalog(&catalog, &ids(&["  canon-r50  "])).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_product_command_not_found() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Table));

        let err = cmd.execute_with_catalog(&catalog, &ids(&["toaster"])).await.unwrap_err();
        assert!(err.to_string().contains("Product not found"));
    }

    #[tokio::test]
    async fn test_product_command_json_format() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Json));

        let output = cmd.execute_with_catalog(&catalog, &ids(&["iphone-15"])).await.unwrap();
        assert!(output.starts_with('{'));
        assert!(output.contains("\"amazonPrice\""));
    }

    #[tokio::test]
    async fn test_product_command_batch_skips_unknown() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Json));

        let output = cmd
            .execute_with_catalog(&catalog, &ids(&["iphone-15", "nope", "dell-xps"]))
            .await
            .unwrap();
        let products: Vec<Product> = serde_json::from_str(&output).unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_product_command_batch_table() {
        let catalog = MockCatalog::new(seed_products());
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Table));

        let output =
            cmd.execute_with_catalog(&catalog, &ids(&["iphone-15", "dell-xps"])).await.unwrap();
        assert!(output.contains("ID:        iphone-15"));
        assert!(output.contains("ID:        dell-xps"));
    }

    #[tokio::test]
    async fn test_product_command_network_error() {
        let catalog = MockCatalog::failing();
        let cmd = ProductCommand::new(make_test_config(OutputFormat::Table));

        let err = cmd.execute_with_catalog(&catalog, &ids(&["iphone-15"])).await.unwrap_err();
        assert!(err.to_string().contains("network error"));
    }
}
