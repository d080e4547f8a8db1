//! price-compare - Amazon vs Flipkart price comparison storefront
//!
//! A SQLite-backed product catalog served over HTTP, with a CLI for
//! browsing, filtering, and comparing store prices side by side.

pub mod catalog;
pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod selection;
pub mod server;

pub use catalog::{CatalogSource, Product, Source};
pub use compare::{compare, CheaperSource, Comparison, ProductComparison};
pub use config::Config;
pub use error::CatalogError;
