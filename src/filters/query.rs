//! Name search filter.

use super::Filter;
use crate::catalog::Product;

/// Matches products whose name contains the query, ignoring case.
pub struct NameFilter {
    query: String,
}

impl NameFilter {
    /// Creates a new name filter. An empty query matches everything.
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into().to_lowercase() }
    }
}

impl Filter for NameFilter {
    fn matches(&self, product: &Product) -> bool {
        self.query.is_empty() || product.name.to_lowercase().contains(&self.query)
    }

    fn description(&self) -> String {
        if self.query.is_empty() {
            "Name: any".to_string()
        } else {
            format!("Name contains: {}", self.query)
        }
    }
}

/// Returns products whose name contains `query` case-insensitively, in input order.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let filter = NameFilter::new(query);
    products.iter().filter(|p| filter.matches(p)).cloned().collect()
}
