//! Error types for the sales analytics system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sales analytics system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sale that breaks the ingest contract (empty key, zero quantity, bad price).
    #[error("Invalid sale: {0}")]
    InvalidSale(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid sale error.
    pub fn invalid_sale(msg: impl Into<String>) -> Self {
        Error::InvalidSale(msg.into())
    }
}
