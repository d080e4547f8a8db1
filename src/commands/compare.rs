//! Side-by-side comparison command implementation.

use super::open_catalog;
use crate::catalog::CatalogSource;
use crate::compare::compare_all;
use crate::config::Config;
use crate::filters::search;
use crate::format::Formatter;
use crate::selection::{Selection, SelectionAction};
use anyhow::Result;
use std::collections::HashSet;
use tracing::{info, warn};

/// Compares the selected products' store prices.
pub struct CompareCommand {
    config: Config,
}

impl CompareCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the comparison and returns formatted output.
    ///
    /// With `all`, every product matching `query` is selected; otherwise only
    /// the given ids (restricted to those matching `query`). Ids and `all`
    /// are mutually exclusive.
    pub async fn execute(&self, ids: &[String], all: bool, query: Option<&str>) -> Result<String> {
        let catalog = open_catalog(&self.config).await?;
        self.execute_with_catalog(catalog.as_ref(), ids, all, query).await
    }

    /// Executes the comparison against a provided catalog (for testing).
    pub async fn execute_with_catalog(
        &self,
        catalog: &dyn CatalogSource,
        ids: &[String],
        all: bool,
        query: Option<&str>,
    ) -> Result<String> {
        if ids.is_empty() && !all {
            anyhow::bail!("No products selected. Pass product ids or --all.");
        }
        if all && !ids.is_empty() {
            anyhow::bail!("Pass product ids or --all, not both.");
        }

        let products = catalog.all_products().await?;
        let visible = search(&products, query.unwrap_or_default());

        let mut selection = Selection::new();
        if all {
            for product in &visible {
                selection.apply(SelectionAction::Toggle(product.id.clone()));
            }
        } else {
            // Repeated ids on the command line select once.
            let mut seen = HashSet::new();
            for id in ids.iter().map(|id| id.trim()).filter(|id| seen.insert(*id)) {
                selection.apply(SelectionAction::Toggle(id.to_string()));
            }

            for id in selection.unknown_ids(&products) {
                warn!("Unknown product id: {}", id);
            }

            for product in selection.list(&products) {
                if !visible.iter().any(|p| p.id == product.id) {
                    warn!("Product {} does not match the search, skipping", product.id);
                }
            }
        }

        let selected = selection.list(&visible);
        info!("Comparing {} of {} products", selected.len(), products.len());

        let rows = compare_all(&selected);
        Ok(Formatter::new(self.config.format).format_comparisons(&rows))
    }
}
