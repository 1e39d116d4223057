//! Storage error types.
//!
//! Used by the roster and quote export files and by callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when reading or writing storage files.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Persist error: {0}")]
    Persist(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for quote_core::QuoteError {
    fn from(e: StorageError) -> Self {
        quote_core::QuoteError::Storage(e.to_string())
    }
}
