//! Path manipulation utilities for the Zellij sandbox.
//!
//! Inside the plugin `/host` points at the directory Zellij was started from,
//! normally the user's home. Paths from configuration use `~`, paths handed to
//! `std::fs` use `/host`, and paths shown to the user have the prefix removed.

use std::path::{Path, PathBuf};

const CATALOG_FILE_NAME: &str = "shorts.json";

/// Returns the plugin data directory, `/host/.local/share/zellij/reelbox`.
///
/// Holds the default catalog and the trace log.
///
/// ```
/// use reelbox::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/reelbox"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("reelbox")
}

/// Returns the catalog location used when none is configured.
#[must_use]
pub fn default_catalog_path() -> String {
    get_data_dir().join(CATALOG_FILE_NAME).display().to_string()
}

/// Expands `~` to the `/host` mount.
///
/// ```
/// use reelbox::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/videos/shorts.json"), "/host/videos/shorts.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix for display.
///
/// ```
/// use reelbox::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/.local/share/zellij/reelbox"), "/.local/share/zellij/reelbox");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}

/// Returns `true` if a file-system update for `changed` refers to the catalog.
///
/// Zellij reports changed paths relative to the host mount, with or without a
/// leading slash, while the catalog path carries the `/host` prefix.
#[must_use]
pub fn is_catalog_path(changed: &Path, catalog_path: &str) -> bool {
    let catalog = strip_host_prefix(catalog_path);
    let catalog = catalog.trim_start_matches('/');
    let changed = changed.to_string_lossy();
    let changed = strip_host_prefix(&changed);

    !catalog.is_empty() && changed.trim_start_matches('/') == catalog
}
