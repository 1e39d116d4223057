//! Quote export: the persistence collaborator for a finished [`ResultMapping`].

use std::path::{Path, PathBuf};

use quote_core::ResultMapping;
use tracing::info;

use crate::error::StorageError;
use crate::json_file::write_json_atomic;

/// Accepts a fully assembled mapping in one write.
pub trait QuoteSink: Send + Sync {
    fn save(&self, mapping: &ResultMapping) -> Result<(), StorageError>;
}

/// Writes the mapping as `{ "<name>": { "quotes": [...], "icon": "..." }, ... }` to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonQuoteStore {
    path: PathBuf,
}

impl JsonQuoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteSink for JsonQuoteStore {
    fn save(&self, mapping: &ResultMapping) -> Result<(), StorageError> {
        write_json_atomic(&self.path, mapping)?;
        info!(
            path = %self.path.display(),
            subjects = mapping.len(),
            quotes = mapping.total_quotes(),
            "Quote export written"
        );
        Ok(())
    }
}
