//! Catalog storage layer.
//!
//! The gallery never writes its data. A [`Catalog`] supplies the read-only list
//! of shorts; [`JsonCatalog`] is the file-backed implementation used by the
//! worker thread.
//!
//! # Modules
//!
//! - `backend`: [`Catalog`] trait
//! - `json`: JSON file implementation
//! - `models`: On-disk record types, separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::Catalog;
pub use json::JsonCatalog;
pub use models::{CatalogFile, ShortRecord};
