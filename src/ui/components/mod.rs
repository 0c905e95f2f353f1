//! Composable UI component renderers.
//!
//! - [`header`]: Title bar with counts and catalog age
//! - [`search`]: Search input box
//! - [`tags`]: Tag chip row
//! - [`grid`]: Short list (TITLE, TAGS, DURATION)
//! - [`empty`]: Empty state message
//! - [`preview`]: Box over the grid for the open short
//! - [`footer`]: Keybinding hints and status line
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Tag chips]
//! [Grid headers]
//! [Grid rows | Empty state]      ← preview box drawn over this area
//! [Border | Status]
//! [Footer]
//! ```

mod empty;
mod footer;
mod grid;
mod header;
mod preview;
mod search;
mod tags;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_status};
use grid::{render_grid_headers, render_grid_rows};
use header::render_header;
use preview::render_preview;
use search::render_search_bar;
use tags::render_tag_bar;

/// Renders a horizontal border line at `row`. Returns `row + 1`.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every component of `vm` into a `rows` x `cols` pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_tag_bar(current_row, &vm.tag_bar, theme, cols);
    current_row = render_grid_headers(current_row, theme, cols);
    let grid_top = current_row;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_grid_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_row = rows;
    let border_row = rows.saturating_sub(1);

    if let Some(preview) = &vm.preview {
        render_preview(grid_top, border_row.saturating_sub(1), preview, theme, cols);
    }

    match &vm.status {
        Some(status) => render_status(border_row, status, theme, cols),
        None => render_border(border_row, &theme.colors.border, cols),
    };
    render_footer(footer_row, &vm.footer, theme, cols);
}
