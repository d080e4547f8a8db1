//! Data models for catalog products and their two store listings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A catalog product listed at both stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier
    pub id: String,
    /// Product name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Product image URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Short marketing description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Listed price at Amazon
    #[serde(default, deserialize_with = "null_as_default")]
    pub amazon_price: f64,
    /// Listed price at Flipkart
    #[serde(default, deserialize_with = "null_as_default")]
    pub flipkart_price: f64,
    /// Amazon purchase link
    #[serde(default, deserialize_with = "null_as_default")]
    pub amazon_url: String,
    /// Flipkart purchase link
    #[serde(default, deserialize_with = "null_as_default")]
    pub flipkart_url: String,
    /// Display bullets
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: Vec<String>,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Creates a product with the given prices and empty metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amazon_price: f64,
        flipkart_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            description: String::new(),
            amazon_price,
            flipkart_price,
            amazon_url: String::new(),
            flipkart_url: String::new(),
            specs: Vec::new(),
        }
    }

    /// Returns the listed price at the given store.
    pub fn price(&self, source: Source) -> f64 {
        match source {
            Source::Amazon => self.amazon_price,
            Source::Flipkart => self.flipkart_price,
        }
    }

    /// Returns the purchase link at the given store.
    pub fn url(&self, source: Source) -> &str {
        match source {
            Source::Amazon => &self.amazon_url,
            Source::Flipkart => &self.flipkart_url,
        }
    }

    /// Returns the lower of the two listed prices.
    pub fn best_price(&self) -> f64 {
        self.amazon_price.min(self.flipkart_price)
    }
}

/// One of the two retail listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    Amazon,
    Flipkart,
}

impl Source {
    pub fn all() -> [Source; 2] {
        [Source::Amazon, Source::Flipkart]
    }

    /// Returns the display name of the store.
    pub fn name(&self) -> &'static str {
        match self {
            Source::Amazon => "Amazon",
            Source::Flipkart => "Flipkart",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
