//! On-disk record models for the JSON catalog.
//!
//! Records mirror the file format (camelCase keys, optional fields) and convert
//! into the domain [`Short`]. Keeping them separate lets the file format stay
//! lenient while the domain type has no optional fields.

use crate::domain::{Short, ShortId};
use serde::{Deserialize, Serialize};

/// A short as stored in the catalog file.
///
/// Only `id` and `title` are required. Missing text fields become empty strings
/// and missing tags an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortRecord {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub video_url: String,

    /// Pre-formatted label such as `"0:45"`.
    #[serde(default)]
    pub duration: String,
}

impl From<ShortRecord> for Short {
    fn from(record: ShortRecord) -> Self {
        Self {
            id: ShortId(record.id),
            title: record.title,
            description: record.description,
            tags: record.tags,
            video_url: record.video_url,
            duration: record.duration,
        }
    }
}

/// Top-level catalog file layout.
///
/// Both a bare array of records and a versioned object are accepted:
///
/// ```json
/// { "version": 1, "shorts": [ { "id": 1, "title": "Cat Jump", "videoUrl": "..." } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CatalogFile {
    Bare(Vec<ShortRecord>),
    Versioned {
        version: u32,
        #[serde(default)]
        shorts: Vec<ShortRecord>,
    },
}

impl CatalogFile {
    /// Format version; bare arrays count as version 1.
    #[must_use]
    pub const fn version(&self) -> u32 {
        match self {
            Self::Bare(_) => 1,
            Self::Versioned { version, .. } => *version,
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ShortRecord> {
        match self {
            Self::Bare(records) | Self::Versioned { shorts: records, .. } => records,
        }
    }
}
