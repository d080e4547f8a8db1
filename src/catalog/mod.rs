//! Catalog store: product model, retrieval sources, and seed data.

pub mod models;
pub mod remote;
pub mod seed;
pub mod store;

use crate::error::Result;
use async_trait::async_trait;

pub use models::{Product, Source};
pub use remote::RemoteCatalog;
pub use store::SqliteCatalog;

/// Read-only access to the full catalog - enables mocking for tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns every product, in insertion order.
    ///
    /// Retrieval is all-or-nothing: a single undecodable record fails the call
    /// with [`CatalogError::MalformedRecord`](crate::error::CatalogError).
    async fn all_products(&self) -> Result<Vec<Product>>;
}
