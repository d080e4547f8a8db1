//! SQLite-backed catalog store.

use super::models::Product;
use super::CatalogSource;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, Row};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    id TEXT PRIMARY KEY,
    name TEXT,
    imageUrl TEXT,
    description TEXT,
    amazonPrice REAL,
    flipkartPrice REAL,
    amazonUrl TEXT,
    flipkartUrl TEXT,
    specs TEXT
)";

const SELECT_ALL: &str = "SELECT id, name, imageUrl, description, amazonPrice, flipkartPrice, \
     amazonUrl, flipkartUrl, specs FROM products ORDER BY rowid";

const UPSERT: &str = "INSERT OR REPLACE INTO products \
     (id, name, imageUrl, description, amazonPrice, flipkartPrice, amazonUrl, flipkartUrl, specs) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// A stored row. Every column except `id` is nullable.
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "camelCase")]
struct ProductRow {
    id: String,
    name: Option<String>,
    image_url: Option<String>,
    description: Option<String>,
    amazon_price: Option<f64>,
    flipkart_price: Option<f64>,
    amazon_url: Option<String>,
    flipkart_url: Option<String>,
    specs: Option<String>,
}

impl ProductRow {
    fn into_product(self) -> Result<Product> {
        let specs = match self.specs.as_deref().map(str::trim) {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| CatalogError::malformed(&self.id, format!("invalid specs: {}", e)))?,
        };

        Ok(Product {
            id: self.id,
            name: self.name.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            amazon_price: self.amazon_price.unwrap_or_default(),
            flipkart_price: self.flipkart_price.unwrap_or_default(),
            amazon_url: self.amazon_url.unwrap_or_default(),
            flipkart_url: self.flipkart_url.unwrap_or_default(),
            specs,
        })
    }
}

fn decode_row(row: &SqliteRow) -> Result<Product> {
    let stored = ProductRow::from_row(row).map_err(|e| {
        let id = row.try_get::<String, _>("id").unwrap_or_else(|_| "<unknown>".to_string());
        CatalogError::malformed(id, e)
    })?;
    stored.into_product()
}

/// Catalog stored in a single SQLite `products` table.
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Opens an existing database file. Fails if the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening catalog database: {}", path.display());

        let options = SqliteConnectOptions::new().filename(path).create_if_missing(false);
        Self::connect(options, 5).await
    }

    /// Opens a database file, creating it if missing.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Creating catalog database: {}", path.display());

        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        Self::connect(options, 5).await
    }

    /// Opens a private in-memory database (single connection).
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::connect(options, 1).await
    }

    async fn connect(options: SqliteConnectOptions, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(8))
            // An in-memory database lives only as long as its connection.
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `products` table if it does not exist.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts or replaces products by id. Returns the number of rows written.
    pub async fn upsert(&self, products: &[Product]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for product in products {
            let specs = serde_json::to_string(&product.specs)
                .map_err(|e| CatalogError::malformed(&product.id, e))?;

            written += sqlx::query(UPSERT)
                .bind(&product.id)
                .bind(&product.name)
                .bind(&product.image_url)
                .bind(&product.description)
                .bind(product.amazon_price)
                .bind(product.flipkart_price)
                .bind(&product.amazon_url)
                .bind(&product.flipkart_url)
                .bind(specs)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        info!("Stored {} products", products.len());
        Ok(written)
    }
}

#[async_trait]
impl CatalogSource for SqliteCatalog {
    async fn all_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(SELECT_ALL).fetch_all(&self.pool).await?;
        debug!("Fetched {} catalog rows", rows.len());

        rows.iter().map(decode_row).collect()
    }
}
