//! Best-price range filter.

use super::Filter;
use crate::catalog::Product;

/// Filters products by the lower of their two listed prices.
pub struct PriceFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceFilter {
    /// Creates a new price filter with optional min/max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn min(price: f64) -> Self {
        Self { min: Some(price), max: None }
    }

    pub fn max(price: f64) -> Self {
        Self { min: None, max: Some(price) }
    }

    pub fn range(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, product: &Product) -> bool {
        let price = product.best_price();

        if let Some(min) = self.min {
            if price < min {
                return false;
            }
        }

        if let Some(max) = self.max {
            if price > max {
                return false;
            }
        }

        true
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Best price: {:.2} - {:.2}", min, max),
            (Some(min), None) => format!("Best price: >= {:.2}", min),
            (None, Some(max)) => format!("Best price: <= {:.2}", max),
            (None, None) => "Best price: any".to_string(),
        }
    }
}
