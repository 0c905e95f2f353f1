//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated strings,
//! precomputed highlight ranges, selection and cursor flags.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Grid rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub search_bar: SearchBarInfo,
    pub tag_bar: TagBarInfo,

    /// Set when the filtered set is empty; replaces the grid.
    pub empty_state: Option<EmptyState>,

    /// Set while a short is open for preview.
    pub preview: Option<PreviewInfo>,

    /// Last worker error, shown above the footer.
    pub status: Option<String>,
}

/// One grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the title column.
    pub title: String,

    /// `#tag` labels joined by spaces, truncated to the tag column.
    pub tags: String,

    pub duration: String,

    pub is_selected: bool,

    /// Character ranges of `title` matching the query, `(start, end)` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Secondary text such as the catalog age.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Shown when no short passes the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// `true` while the search input has focus.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBarInfo {
    pub chips: Vec<TagChip>,
    /// `true` while the chip row has focus.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    /// The chip's tag is the active tag filter.
    pub is_selected: bool,
    /// The chip cursor is on this chip.
    pub is_cursor: bool,
}

/// Data for the preview box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewInfo {
    pub title: String,
    pub tags: Vec<String>,
    /// Description split into lines that fit the box.
    pub description_lines: Vec<String>,
    pub duration: String,
    pub video_url: String,
}
