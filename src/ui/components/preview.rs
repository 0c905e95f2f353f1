//! Preview box renderer.
//!
//! Drawn over the grid while a short is open. Layout, top to bottom: title,
//! tags, blank, wrapped description, blank, duration and URL, then a key hint.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PreviewInfo;

const PREVIEW_MARGIN: usize = 4;

/// Draws the preview box with its top border at `top` and never past `bottom`.
pub fn render_preview(top: usize, bottom: usize, preview: &PreviewInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(PREVIEW_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    if inner_width == 0 || bottom <= top + 1 {
        return;
    }

    let tags = preview
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines: Vec<(String, &str)> = vec![
        (preview.title.clone(), theme.colors.header_fg.as_str()),
        (tags, theme.colors.tag_fg.as_str()),
        (String::new(), theme.colors.text_normal.as_str()),
    ];
    lines.extend(
        preview
            .description_lines
            .iter()
            .map(|line| (line.clone(), theme.colors.text_normal.as_str())),
    );
    lines.push((String::new(), theme.colors.text_normal.as_str()));
    lines.push((format!("Duration: {}", preview.duration), theme.colors.duration_fg.as_str()));
    if !preview.video_url.is_empty() {
        lines.push((preview.video_url.clone(), theme.colors.text_dim.as_str()));
    }
    lines.push(("Esc/q: close  p: play".to_string(), theme.colors.text_dim.as_str()));

    let max_lines = bottom - top - 1;
    let border = &theme.colors.preview_border;
    let pad = " ".repeat(PREVIEW_MARGIN);

    position_cursor(top, 1);
    print!("{pad}{}┌{}┐{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());

    let mut row = top + 1;
    for (text, color) in lines.iter().take(max_lines) {
        let text: String = text.chars().take(inner_width.saturating_sub(2)).collect();
        let fill = inner_width.saturating_sub(text.chars().count() + 1);

        position_cursor(row, 1);
        print!("{pad}{}│{}", Theme::fg(border), Theme::fg(color));
        if row == top + 1 {
            print!("{}", Theme::bold());
        }
        print!(" {text}{}", " ".repeat(fill));
        print!("{}{}│{}", Theme::reset(), Theme::fg(border), Theme::reset());
        row += 1;
    }

    position_cursor(row, 1);
    print!("{pad}{}└{}┘{}", Theme::fg(border), "─".repeat(inner_width), Theme::reset());
}
