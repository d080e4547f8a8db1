//! HTTP client for a remote catalog retrieval endpoint.

use super::models::Product;
use super::CatalogSource;
use crate::error::{CatalogError, Result};
use crate::server::ErrorBody;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;

/// Catalog read from another instance's `GET /api/products`.
pub struct RemoteCatalog {
    client: Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Creates a client for the endpoint rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CatalogError::unavailable(format!("failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        let url = self.products_url();
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::unavailable(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CatalogError::unavailable(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| "no error message".to_string());
            warn!("Catalog endpoint returned {}: {}", status, message);
            return Err(CatalogError::unavailable(format!("{}: {}", status, message)));
        }

        let products = decode_products(&body)?;
        info!("Fetched {} products from {}", products.len(), self.base_url);
        Ok(products)
    }
}

/// Decodes a JSON array of products. Elements are decoded one at a time so a
/// bad element is reported by its id.
pub fn decode_products(body: &str) -> Result<Vec<Product>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| CatalogError::unavailable(format!("invalid response body: {}", e)))?;

    rows.into_iter()
        .map(|row| {
            let id = row.get("id").and_then(|v| v.as_str()).unwrap_or("<unknown>").to_string();
            serde_json::from_value(row).map_err(|e| CatalogError::malformed(id, e))
        })
        .collect()
}
