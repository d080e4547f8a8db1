//! Per-product comparison of the two store listings.

use crate::catalog::{Product, Source};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which store lists the product for less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheaperSource {
    Amazon,
    Flipkart,
    Tie,
}

impl CheaperSource {
    /// Returns the winning store, or `None` on a tie.
    pub fn source(&self) -> Option<Source> {
        match self {
            CheaperSource::Amazon => Some(Source::Amazon),
            CheaperSource::Flipkart => Some(Source::Flipkart),
            CheaperSource::Tie => None,
        }
    }
}

impl fmt::Display for CheaperSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source() {
            Some(source) => write!(f, "{}", source),
            None => write!(f, "Tie"),
        }
    }
}

/// Result of comparing one product's two prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub cheaper_source: CheaperSource,
    /// Absolute difference between the two prices
    pub savings: f64,
}

/// Compares a product's two listed prices.
pub fn compare(product: &Product) -> Comparison {
    let (amazon, flipkart) = (product.amazon_price, product.flipkart_price);

    let cheaper_source = if amazon < flipkart {
        CheaperSource::Amazon
    } else if flipkart < amazon {
        CheaperSource::Flipkart
    } else {
        CheaperSource::Tie
    };

    Comparison { cheaper_source, savings: (amazon - flipkart).abs() }
}

/// A product together with its comparison, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComparison {
    pub id: String,
    pub name: String,
    pub amazon_price: f64,
    pub flipkart_price: f64,
    pub cheaper_source: CheaperSource,
    pub savings: f64,
    /// Savings as a percentage of the higher price (0 when both are 0)
    pub savings_percent: f64,
    /// Purchase link at the cheaper store (None on a tie)
    pub best_url: Option<String>,
}

impl ProductComparison {
    pub fn new(product: &Product) -> Self {
        let comparison = compare(product);
        let best_url = comparison.cheaper_source.source().map(|s| product.url(s).to_string());

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            amazon_price: product.amazon_price,
            flipkart_price: product.flipkart_price,
            cheaper_source: comparison.cheaper_source,
            savings: comparison.savings,
            savings_percent: savings_percent(product, comparison.savings),
            best_url,
        }
    }
}

fn savings_percent(product: &Product, savings: f64) -> f64 {
    let higher = product.amazon_price.max(product.flipkart_price);
    if higher > 0.0 {
        savings / higher * 100.0
    } else {
        0.0
    }
}

/// Compares every product independently, keeping input order.
pub fn compare_all(products: &[Product]) -> Vec<ProductComparison> {
    products.iter().map(ProductComparison::new).collect()
}

/// Sum of savings across comparison rows.
pub fn total_savings(rows: &[ProductComparison]) -> f64 {
    rows.iter().map(|r| r.savings).sum()
}
