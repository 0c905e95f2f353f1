//! Header component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar: centered title, subtitle right-aligned in dim text.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let subtitle_len = header.subtitle.chars().count();
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);

    let used = padding + title_len;
    if subtitle_len + 1 < cols.saturating_sub(used) {
        print!("{}", " ".repeat(cols - used - subtitle_len - 1));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{} ", header.subtitle);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(used)));
    }

    print!("{}", Theme::reset());
    row + 1
}
