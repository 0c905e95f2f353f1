//! Empty state renderer, shown in place of the grid when nothing matches.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and a dim subtitle, centered, starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let row = render_centered(row + 1, &empty.message, &theme.colors.empty_state_fg, false, cols);
    render_centered(row, &empty.subtitle, &theme.colors.text_dim, true, cols)
}

fn render_centered(row: usize, text: &str, color: &str, dim: bool, cols: usize) -> usize {
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    if dim {
        print!("{}", Theme::dim());
    }
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
    row + 1
}
