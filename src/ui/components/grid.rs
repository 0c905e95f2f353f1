//! Grid component renderer.
//!
//! Three columns: TITLE, TAGS and DURATION. Selection colors the whole row;
//! query matches in the title are highlighted on unselected rows.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const TITLE_COLUMN_WIDTH: usize = 40;
const DURATION_COLUMN_WIDTH: usize = 8;

pub fn render_grid_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let tags_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + DURATION_COLUMN_WIDTH);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<title$}{:<tags$}{:>dur$}",
        "TITLE",
        "TAGS",
        "DURATION",
        title = TITLE_COLUMN_WIDTH,
        tags = tags_width,
        dur = DURATION_COLUMN_WIDTH
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `items` one per row starting at `row`. Returns the next free row.
pub fn render_grid_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_grid_row(current_row, item, theme, cols))
}

fn render_grid_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base_fg = if item.is_selected {
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(base_fg));
    if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    let title_len = item.title.chars().count();
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.tag_fg));
    }
    print!("{}", item.tags);
    let tags_len = item.tags.chars().count();

    let line_len = TITLE_COLUMN_WIDTH.max(title_len) + tags_len;
    let duration_len = item.duration.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len + duration_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.duration_fg));
    }
    print!("{}", item.duration);

    print!("{}", Theme::reset());
    row + 1
}
