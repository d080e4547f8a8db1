//! Error types for catalog retrieval.

use thiserror::Error;

/// Failures surfaced by a [`CatalogSource`](crate::catalog::CatalogSource).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store or endpoint could not be read.
    #[error("catalog data unavailable: {0}")]
    DataUnavailable(String),

    /// A stored record could not be decoded. Fails the whole retrieval.
    #[error("malformed record '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        CatalogError::DataUnavailable(message.into())
    }

    pub fn malformed(id: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::MalformedRecord { id: id.into(), reason: reason.to_string() }
    }
}

impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        CatalogError::DataUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
