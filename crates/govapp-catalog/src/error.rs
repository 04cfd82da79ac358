//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur when parsing an embedded catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The embedded JSON for a table did not match the model.
    #[error("Failed to parse {table} catalog: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
