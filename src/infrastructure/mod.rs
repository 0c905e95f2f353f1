//! Infrastructure layer for filesystem and environment interactions.
//!
//! Path handling for the Zellij plugin sandbox, where the host filesystem is
//! mounted under `/host`.

pub mod paths;

pub use paths::{default_catalog_path, expand_tilde, get_data_dir, is_catalog_path, strip_host_prefix};
