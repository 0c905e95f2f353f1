//! Input mode state for the gallery.
//!
//! The input mode decides how keys are interpreted while no preview is open.
//! An open preview overrides every mode: see [`crate::app::selection`].
//!
//! - **Browse**: navigate the grid, open items, switch modes
//! - **Search**: keys edit the query
//! - **Tags**: keys move along the tag chips and toggle them
//!
//! # Example
//!
//! ```rust
//! use reelbox::app::modes::InputMode;
//!
//! let mode = InputMode::default();
//! assert_eq!(mode, InputMode::Browse);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: j/k (navigate), enter (preview), / (search),
    /// t (tags), x (clear query), r (reload), q (quit).
    #[default]
    Browse,

    /// Typing into the search query.
    ///
    /// Characters and backspace edit the query; enter or esc return to Browse
    /// without clearing it.
    Search,

    /// Moving along the tag chips.
    ///
    /// h/l move the chip cursor, enter or space toggles the chip's tag.
    Tags,
}

impl InputMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Browse => "BROWSE",
            Self::Search => "SEARCH",
            Self::Tags => "TAGS",
        }
    }
}
