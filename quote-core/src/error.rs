//! Error types for the quote pipeline.
//!
//! [`QuoteError`] covers the external collaborators (fetch, persistence, config). Markup
//! expansion and quote extraction never fail, so they have no variant here.

use thiserror::Error;

/// Top-level error for fetch, config, IO, serialization and storage failures.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for core operations; uses [`QuoteError`].
pub type Result<T> = std::result::Result<T, QuoteError>;
