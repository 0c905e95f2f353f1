//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the gallery: the catalog, the
//! derived tag universe and visible subset, the grid and chip cursors, and the
//! two controllers that own the user-facing state machines
//! ([`FilterEngine`] and [`SelectionController`]).
//!
//! # Derived State
//!
//! `tags` and `filtered` are recomputed from `shorts` and the filter inputs
//! whenever either changes. They are never edited directly. The grid cursor is
//! clamped after every recomputation.
//!
//! # Example
//!
//! ```rust
//! use reelbox::app::AppState;
//! use reelbox::domain::Short;
//! use reelbox::ui::Theme;
//!
//! let shorts = vec![Short::new(1, "Cat Jump").with_tags(["cats"])];
//! let mut state = AppState::new(shorts, Theme::default());
//! state.set_query("cat");
//! assert_eq!(state.filtered.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::filter::{distinct_tags, FilterEngine};
use super::modes::InputMode;
use super::selection::{SelectionController, ViewportLock};
use crate::domain::{Short, ShortId};
use crate::ui::helpers::{find_match_range, format_age, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PreviewInfo, SearchBarInfo, TagBarInfo,
    TagChip, UIViewModel,
};

const EMPTY_MESSAGE: &str = "No shorts found. Try a different search or filter.";
const TITLE_COLUMN_WIDTH: usize = 40;
const DURATION_COLUMN_WIDTH: usize = 8;
const PREVIEW_MARGIN: usize = 4;

/// Rows taken by header, search bar, tag chips, column header and footer.
const CHROME_ROWS: usize = 10;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Catalog contents in catalog order.
    pub shorts: Vec<Short>,

    /// Distinct tags of `shorts`, first-seen order.
    pub tags: Vec<String>,

    /// Shorts passing the current filters, in catalog order.
    pub filtered: Vec<Short>,

    /// Grid cursor within `filtered`.
    pub cursor: usize,

    /// Chip cursor within `tags`.
    pub tag_cursor: usize,

    pub input_mode: InputMode,

    pub filter: FilterEngine,

    pub selection: SelectionController<ViewportLock>,

    pub theme: Theme,

    /// Catalog file the worker reads.
    pub catalog_path: String,

    /// Unix timestamp of the last successful catalog load.
    pub loaded_at: Option<i64>,

    /// Last error reported by the worker. Cleared by the next successful load.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a state over `shorts` with empty filters and nothing open.
    #[must_use]
    pub fn new(shorts: Vec<Short>, theme: Theme) -> Self {
        let mut state = Self {
            tags: distinct_tags(&shorts),
            shorts,
            filtered: vec![],
            cursor: 0,
            tag_cursor: 0,
            input_mode: InputMode::Browse,
            filter: FilterEngine::default(),
            selection: SelectionController::default(),
            theme,
            catalog_path: String::new(),
            loaded_at: None,
            status: None,
        };
        state.apply_filter();
        state
    }

    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Replaces the catalog contents.
    ///
    /// Recomputes the tag universe and visible set. A selected tag that no
    /// longer exists stays selected, matching nothing. If the open short is gone
    /// from the new catalog the preview is closed.
    pub fn set_shorts(&mut self, shorts: Vec<Short>, loaded_at: Option<i64>) {
        let _span = tracing::debug_span!("set_shorts", count = shorts.len()).entered();

        self.shorts = shorts;
        self.tags = distinct_tags(&self.shorts);
        self.tag_cursor = self.tag_cursor.min(self.tags.len().saturating_sub(1));
        self.loaded_at = loaded_at;
        self.status = None;

        if let Some(id) = self.selection.open_item() {
            if self.find_short(id).is_none() {
                tracing::debug!(short_id = %id, "open short dropped by reload");
                self.selection.close();
            }
        }

        self.apply_filter();
    }

    /// Recomputes `filtered` from the catalog and filter state, then clamps the
    /// grid cursor.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total = self.shorts.len(),
            query_len = self.filter.query().len(),
            selected_tag = ?self.filter.selected_tag()
        )
        .entered();

        self.filtered = self.filter.apply(&self.shorts).into_iter().cloned().collect();

        if self.filtered.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.filtered.len() - 1);
        }

        tracing::debug!(visible = self.filtered.len(), "filter applied");
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filter.set_query(text);
        self.apply_filter();
    }

    pub fn clear_query(&mut self) {
        self.filter.clear_query();
        self.apply_filter();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
        self.apply_filter();
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.filter.query().to_string();
        query.push(c);
        self.set_query(query);
    }

    /// Removes the last character of the query. Returns `false` if it was empty.
    pub fn pop_query_char(&mut self) -> bool {
        let mut query = self.filter.query().to_string();
        if query.pop().is_none() {
            return false;
        }
        self.set_query(query);
        true
    }

    /// Moves the grid cursor down, wrapping to the top.
    ///
    /// Returns `false` without moving while the viewport is scroll-locked or the
    /// grid is empty.
    pub fn move_cursor_down(&mut self) -> bool {
        if self.selection.scroll_lock().is_locked() || self.filtered.is_empty() {
            return false;
        }
        self.cursor = (self.cursor + 1) % self.filtered.len();
        true
    }

    /// Moves the grid cursor up, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) -> bool {
        if self.selection.scroll_lock().is_locked() || self.filtered.is_empty() {
            return false;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.filtered.len() - 1);
        true
    }

    pub fn move_tag_cursor_right(&mut self) -> bool {
        if self.tags.is_empty() {
            return false;
        }
        self.tag_cursor = (self.tag_cursor + 1) % self.tags.len();
        true
    }

    pub fn move_tag_cursor_left(&mut self) -> bool {
        if self.tags.is_empty() {
            return false;
        }
        self.tag_cursor = self.tag_cursor.checked_sub(1).unwrap_or(self.tags.len() - 1);
        true
    }

    /// Returns the short under the grid cursor.
    #[must_use]
    pub fn cursor_short(&self) -> Option<&Short> {
        self.filtered.get(self.cursor)
    }

    /// Returns the tag under the chip cursor.
    #[must_use]
    pub fn tag_under_cursor(&self) -> Option<&str> {
        self.tags.get(self.tag_cursor).map(String::as_str)
    }

    #[must_use]
    pub fn find_short(&self, id: ShortId) -> Option<&Short> {
        self.shorts.iter().find(|short| short.id == id)
    }

    /// Returns the short currently open in the preview.
    #[must_use]
    pub fn open_short(&self) -> Option<&Short> {
        self.selection.open_item().and_then(|id| self.find_short(id))
    }

    /// Opens `id` for preview. Returns `false` for ids not in the catalog.
    pub fn open(&mut self, id: ShortId) -> bool {
        if self.find_short(id).is_none() {
            tracing::debug!(short_id = %id, "ignoring open of unknown short");
            return false;
        }
        self.selection.open(id);
        true
    }

    /// Opens the short under the grid cursor.
    pub fn open_cursor(&mut self) -> bool {
        match self.cursor_short().map(|short| short.id) {
            Some(id) => self.open(id),
            None => false,
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// The grid window is centered on the cursor and shifted to stay full near
    /// the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let (display_items, selected_index) = if self.filtered.is_empty() {
            (vec![], 0)
        } else {
            let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
            let visible_end = (visible_start + available_rows).min(self.filtered.len());
            if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
                visible_start = visible_end.saturating_sub(available_rows);
            }

            let items = self.filtered[visible_start..visible_end]
                .iter()
                .enumerate()
                .map(|(offset, short)| self.compute_display_item(short, visible_start + offset, cols))
                .collect();
            (items, self.cursor - visible_start)
        };

        let empty_state = self.filtered.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            subtitle: if self.shorts.is_empty() {
                format!("Catalog: {}", self.catalog_path)
            } else {
                "x: clear query  t: tags".to_string()
            },
        });

        UIViewModel {
            display_items,
            selected_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: SearchBarInfo {
                query: self.filter.query().to_string(),
                is_active: self.input_mode == InputMode::Search,
            },
            tag_bar: self.compute_tag_bar(),
            empty_state,
            preview: self.compute_preview(cols),
            status: self.status.clone(),
        }
    }

    fn compute_display_item(&self, short: &Short, absolute_idx: usize, cols: usize) -> DisplayItem {
        let tags_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + DURATION_COLUMN_WIDTH + 4);
        let title = truncate(&short.title, TITLE_COLUMN_WIDTH - 2);

        let tags = short
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");

        let highlight_ranges = find_match_range(&title, self.filter.query())
            .into_iter()
            .collect();

        DisplayItem {
            title,
            tags: truncate(&tags, tags_width),
            duration: short.duration.clone(),
            is_selected: absolute_idx == self.cursor,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = self.loaded_at.map_or_else(
            || "loading...".to_string(),
            |ts| format!("loaded {}", format_age(ts, chrono::Utc::now().timestamp())),
        );
        HeaderInfo {
            title: format!(" Shorts ({}/{}) ", self.filtered.len(), self.shorts.len()),
            subtitle,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selection.is_open() {
            "Esc/q: close  p: play"
        } else {
            match self.input_mode {
                InputMode::Browse => {
                    "j/k: navigate  Enter: preview  /: search  t: tags  x: clear  r: reload  q: quit"
                }
                InputMode::Search => "Type to filter  Ctrl+u: clear  Ctrl+n/p: navigate  Enter/Esc: done",
                InputMode::Tags => "h/l: move  Enter/Space: toggle  Esc/t: done",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_tag_bar(&self) -> TagBarInfo {
        let is_active = self.input_mode == InputMode::Tags;
        let selected = self.filter.selected_tag();

        let chips = self
            .tags
            .iter()
            .enumerate()
            .map(|(idx, tag)| TagChip {
                label: tag.clone(),
                is_selected: selected == Some(tag.as_str()),
                is_cursor: is_active && idx == self.tag_cursor,
            })
            .collect();

        TagBarInfo { chips, is_active }
    }

    fn compute_preview(&self, cols: usize) -> Option<PreviewInfo> {
        let short = self.open_short()?;
        let width = cols.saturating_sub(2 * PREVIEW_MARGIN + 4).max(10);

        Some(PreviewInfo {
            title: truncate(&short.title, width),
            tags: short.tags.clone(),
            description_lines: wrap_text(&short.description, width),
            duration: short.duration.clone(),
            video_url: truncate(&short.video_url, width),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Short> {
        vec![
            Short::new(1, "Cat Jump").with_tags(["funny", "cats"]),
            Short::new(2, "Dog Run").with_tags(["funny", "dogs"]),
            Short::new(3, "Sunset").with_tags(["nature"]),
        ]
    }

    fn state() -> AppState {
        AppState::new(sample(), Theme::default())
    }

    #[test]
    fn test_new_derives_tags_and_visible_set() {
        let state = state();
        assert_eq!(state.tags, vec!["funny", "cats", "dogs", "nature"]);
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn test_cursor_clamped_after_filtering() {
        let mut state = state();
        state.cursor = 2;
        state.set_query("dog");
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut state = state();
        assert!(state.move_cursor_up());
        assert_eq!(state.cursor, 2);
        assert!(state.move_cursor_down());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_frozen_while_preview_open() {
        let mut state = state();
        assert!(state.open_cursor());
        assert!(!state.move_cursor_down());
        assert_eq!(state.cursor, 0);

        state.selection.close();
        assert!(state.move_cursor_down());
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_open_unknown_id_is_ignored() {
        let mut state = state();
        assert!(!state.open(ShortId(42)));
        assert!(!state.selection.is_open());
    }

    #[test]
    fn test_query_edits() {
        let mut state = state();
        state.push_query_char('s');
        state.push_query_char('u');
        assert_eq!(state.filtered.len(), 1);
        assert!(state.pop_query_char());
        assert!(state.pop_query_char());
        assert!(!state.pop_query_char());
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn test_reload_dropping_open_short_closes_preview() {
        let mut state = state();
        state.open(ShortId(2));

        state.set_shorts(vec![Short::new(1, "Cat Jump")], Some(1_700_000_000));

        assert!(!state.selection.is_open());
        assert!(!state.selection.scroll_lock().is_locked());
        assert_eq!(state.tags, Vec::<String>::new());
    }

    #[test]
    fn test_reload_keeping_open_short_keeps_preview() {
        let mut state = state();
        state.open(ShortId(1));
        state.set_shorts(sample(), None);
        assert_eq!(state.selection.open_item(), Some(ShortId(1)));
    }

    #[test]
    fn test_viewmodel_marks_chips_and_highlights() {
        let mut state = state();
        state.input_mode = InputMode::Tags;
        state.tag_cursor = 1;
        state.toggle_tag("funny");
        state.set_query("run");

        let vm = state.compute_viewmodel(24, 100);

        assert_eq!(vm.display_items.len(), 1);
        assert_eq!(vm.display_items[0].title, "Dog Run");
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(4, 7)]);
        assert_eq!(vm.display_items[0].tags, "#funny #dogs");
        assert!(vm.tag_bar.chips[0].is_selected);
        assert!(vm.tag_bar.chips[1].is_cursor);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn test_viewmodel_empty_state() {
        let mut state = state();
        state.set_query("zebra");
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("No shorts found. Try a different search or filter.".to_string())
        );
    }

    #[test]
    fn test_viewmodel_window_follows_cursor() {
        let shorts: Vec<Short> = (0..50u64).map(|i| Short::new(i, format!("Short {i}"))).collect();
        let mut state = AppState::new(shorts, Theme::default());
        state.cursor = 49;

        let vm = state.compute_viewmodel(20, 80);

        assert_eq!(vm.display_items.len(), 10);
        assert_eq!(vm.display_items[9].title, "Short 49");
        assert_eq!(vm.selected_index, 9);
    }

    #[test]
    fn test_viewmodel_preview() {
        let mut state = AppState::new(
            vec![Short::new(7, "Waves")
                .with_description("Slow waves at dusk")
                .with_video("https://example.com/waves.mp4", "0:30")],
            Theme::default(),
        );
        state.open(ShortId(7));

        let preview = state.compute_viewmodel(24, 80).preview.unwrap();
        assert_eq!(preview.title, "Waves");
        assert_eq!(preview.description_lines, vec!["Slow waves at dusk"]);
        assert_eq!(preview.duration, "0:30");
    }
}
