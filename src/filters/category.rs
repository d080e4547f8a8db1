//! Heuristic product categories derived from the product name.

use super::Filter;
use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Phone,
    Laptop,
    Tablet,
    Audio,
    Gaming,
    Camera,
    Wearable,
    Other,
}

/// Keyword rules, evaluated top to bottom against the lowercased name.
///
/// First match wins. "headphones" contains "phone", so audio precedes phones.
const RULES: &[(&[&str], Category)] = &[
    (&["headphone", "earbud", "earphone", "airpods", "speaker", "soundbar"], Category::Audio),
    (&["watch", "fitness band", "smartband", "fitbit"], Category::Wearable),
    (&["macbook", "laptop", "notebook", "chromebook", "xps"], Category::Laptop),
    (&["ipad", "tablet", "galaxy tab"], Category::Tablet),
    (&["iphone", "phone", "galaxy s", "pixel", "oneplus", "redmi"], Category::Phone),
    (&["playstation", "ps5", "xbox", "nintendo", "console", "gaming"], Category::Gaming),
    (&["camera", "mirrorless", "dslr", "eos", "gopro"], Category::Camera),
];

impl Category {
    /// Derives the category from a product name. Falls through to `Other`.
    pub fn of(product: &Product) -> Self {
        Self::from_name(&product.name)
    }

    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();

        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Other)
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Phone,
            Category::Laptop,
            Category::Tablet,
            Category::Audio,
            Category::Gaming,
            Category::Camera,
            Category::Wearable,
            Category::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Phone => "Phone",
            Category::Laptop => "Laptop",
            Category::Tablet => "Tablet",
            Category::Audio => "Audio",
            Category::Gaming => "Gaming",
            Category::Camera => "Camera",
            Category::Wearable => "Wearable",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                let labels: Vec<_> = Category::all().iter().map(|c| c.label()).collect();
                format!("Unknown category: {}. Use: {}", s, labels.join(", "))
            })
    }
}

/// Keeps products of a single category.
pub struct CategoryFilter {
    category: Category,
}

impl CategoryFilter {
    pub fn new(category: Category) -> Self {
        Self { category }
    }
}

impl Filter for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        Category::of(product) == self.category
    }

    fn description(&self) -> String {
        format!("Category: {}", self.category)
    }
}
