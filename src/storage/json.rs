//! JSON file catalog.
//!
//! The file is read in full on every load; catalogs are small and reloads are
//! user-triggered.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "shorts": [
//!     {
//!       "id": 1,
//!       "title": "Cat Jump",
//!       "description": "A cat misjudges a jump.",
//!       "tags": ["funny", "cats"],
//!       "videoUrl": "https://www.youtube.com/embed/abc123",
//!       "duration": "0:15"
//!     }
//!   ]
//! }
//! ```
//!
//! A bare array of the same records is also accepted.

use crate::domain::{ReelboxError, Result, Short};
use crate::storage::backend::Catalog;
use crate::storage::models::CatalogFile;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Highest catalog format version this build understands.
pub const SUPPORTED_VERSION: u32 = 1;

/// Catalog backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses catalog JSON into shorts.
    ///
    /// Records with an id already seen are dropped with a warning, keeping the
    /// first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ReelboxError::Catalog`] for malformed JSON or an unsupported
    /// format version.
    pub fn parse(contents: &str) -> Result<Vec<Short>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| ReelboxError::Catalog(format!("failed to parse JSON: {e}")))?;

        let version = file.version();
        if version > SUPPORTED_VERSION {
            return Err(ReelboxError::Catalog(format!(
                "unsupported catalog version {version} (max {SUPPORTED_VERSION})"
            )));
        }

        let mut seen = HashSet::new();
        let shorts: Vec<Short> = file
            .into_records()
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id);
                if !fresh {
                    tracing::warn!(id = record.id, title = %record.title, "duplicate short id, keeping first");
                }
                fresh
            })
            .map(Short::from)
            .collect();

        tracing::debug!(version = version, count = shorts.len(), "catalog parsed");
        Ok(shorts)
    }
}

impl Catalog for JsonCatalog {
    fn load_shorts(&self) -> Result<Vec<Short>> {
        let _span = tracing::debug_span!("json_load_shorts", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            return Err(ReelboxError::Catalog(format!(
                "catalog not found: {}",
                self.file_path.display()
            )));
        }

        let contents = std::fs::read_to_string(&self.file_path)?;
        Self::parse(&contents)
    }
}
