//! Reelbox: a Zellij plugin for browsing a catalog of short videos.
//!
//! Reelbox lists shorts from a JSON catalog in a filterable grid:
//! - Free-text search over titles and tags (case-insensitive substring)
//! - A single tag filter chosen from chips built from the catalog's tags
//! - A preview of the selected short that locks grid scrolling and closes on
//!   Esc
//! - Playback by handing the short's URL to an external player
//! - Catalog reads on a Zellij worker thread, reloaded when the file changes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Filter engine (query + tag)                      │
//! │  - Selection controller (preview, scroll lock, Esc) │
//! │  - Event handling and view model computation        │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Catalog API │   │ - Catalog I/O │
//! │ - Theming     │   │ - JSON file   │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (Short, errors) & Infrastructure (paths)    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry spans exported to a rotating file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/reelbox.wasm" {
//!         catalog_path "~/.local/share/zellij/reelbox/shorts.json"
//!         theme "catppuccin-mocha"
//!         player "mpv"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use reelbox::{handle_event, initialize, Config, Event};
//! use reelbox::domain::Short;
//!
//! let mut state = initialize(&Config::default());
//! state.set_shorts(vec![Short::new(1, "Cat Jump").with_tags(["cats"])], None);
//!
//! for event in [Event::TagMode, Event::ToggleTagAtCursor, Event::ExitTagMode, Event::OpenSelected] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert!(state.selection.is_open());
//! # Ok::<(), reelbox::ReelboxError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{ReelboxError, Result, Short, ShortId};
pub use ui::Theme;

use infrastructure::{default_catalog_path, expand_tilde};
use std::collections::BTreeMap;

const DEFAULT_PLAYER: &str = "xdg-open";

const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Plugin configuration parsed from Zellij's plugin options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file inside the sandbox (`~` already expanded to `/host`).
    pub catalog_path: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `debug` or `reelbox=trace`. Default: `info`.
    pub trace_level: Option<String>,

    /// Command that receives the video URL as its only argument.
    pub player: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            player: DEFAULT_PLAYER.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's option map.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use reelbox::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/videos/shorts.json".to_string());
    /// map.insert("player".to_string(), "mpv".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path, "/host/videos/shorts.json");
    /// assert_eq!(config.player, "mpv");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            catalog_path: get("catalog_path").map_or_else(default_catalog_path, |p| expand_tilde(&p)),
            theme_name: get("theme"),
            theme_file: get("theme_file").map(|p| expand_tilde(&p)),
            trace_level: get("trace_level"),
            player: get("player").unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
        }
    }

    /// Checks option values that `from_zellij` accepts but cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ReelboxError::Config`] for an unknown built-in theme name or a
    /// trace level that is not a valid filter directive.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.theme_name {
            if self.theme_file.is_none() && !BUILTIN_THEMES.contains(&name.as_str()) {
                return Err(ReelboxError::Config(format!(
                    "unknown theme '{name}', expected one of {}",
                    BUILTIN_THEMES.join(", ")
                )));
            }
        }

        if let Some(level) = &self.trace_level {
            tracing_subscriber::EnvFilter::try_new(level)
                .map_err(|e| ReelboxError::Config(format!("invalid trace_level '{level}': {e}")))?;
        }

        Ok(())
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the initial application state: no shorts until the worker answers.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog_path = %config.catalog_path, "initializing reelbox");

    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "configuration problem");
    }

    AppState::new(vec![], config.load_theme()).with_catalog_path(config.catalog_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog_path, "/host/.local/share/zellij/reelbox/shorts.json");
        assert_eq!(config.player, "xdg-open");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("player", "  "), ("theme", "")]));
        assert_eq!(config.player, "xdg-open");
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn test_theme_file_is_expanded() {
        let config = Config::from_zellij(&map(&[("theme_file", "~/themes/mine.toml")]));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert!(matches!(config.validate(), Err(ReelboxError::Config(_))));
    }

    #[test]
    fn test_validate_accepts_builtin_theme_and_level() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte"), ("trace_level", "debug")]));
        assert!(config.validate().is_ok());
        assert_eq!(config.load_theme().name, "catppuccin-latte");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn test_initialize_carries_catalog_path() {
        let config = Config::from_zellij(&map(&[("catalog_path", "/host/shorts.json")]));
        let state = initialize(&config);
        assert_eq!(state.catalog_path, "/host/shorts.json");
        assert!(state.shorts.is_empty());
    }
}
