//! Shared rendering utilities and helpers.
//!
//! Cursor positioning and highlighted text output, plus the pure text helpers
//! the view model computation relies on: query match ranges, truncation, word
//! wrapping and age formatting. All index arithmetic is on characters, never on
//! bytes.

use crate::ui::theme::Theme;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86400;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges.
///
/// Ranges use character indices with an exclusive end. Highlighting is skipped
/// on selected rows so it does not fight the selection background.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            print!("{}", chars[current_pos..start].iter().collect::<String>());
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{}", chars[start..end].iter().collect::<String>());
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        print!("{}", chars[current_pos..].iter().collect::<String>());
    }
}

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// Returns the character range `(start, end)` of the match in `text`, or `None`
/// for an empty query or no match.
///
/// # Example
///
/// ```rust
/// use reelbox::ui::helpers::find_match_range;
///
/// assert_eq!(find_match_range("Dog Run", "RUN"), Some((4, 7)));
/// assert_eq!(find_match_range("Dog Run", "cat"), None);
/// ```
#[must_use]
pub fn find_match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    let folded: Vec<String> = text.chars().map(|c| c.to_lowercase().collect()).collect();

    for start in 0..folded.len() {
        let mut candidate = String::new();
        for (idx, piece) in folded.iter().enumerate().skip(start) {
            candidate.push_str(piece);
            if candidate == needle {
                return Some((start, idx + 1));
            }
            if !needle.starts_with(&candidate) {
                break;
            }
        }
    }

    None
}

/// Truncates `text` to `max_chars` characters, ending with `...` when cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap at `width` characters. Words longer than `width` are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }

        if chars.is_empty() {
            continue;
        }

        let needed = if line_len == 0 { chars.len() } else { line_len + 1 + chars.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(chars.iter());
        line_len += chars.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Formats how long ago `timestamp` was, relative to `now` (both Unix seconds).
///
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "Xm ago"
/// - Less than 1 day: "Xh ago"
/// - Otherwise: "Xd ago"
#[must_use]
pub fn format_age(timestamp: i64, now: i64) -> String {
    let diff = now.saturating_sub(timestamp);

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_match_range_ignores_case() {
        assert_eq!(find_match_range("Cat Jump", "cat"), Some((0, 3)));
        assert_eq!(find_match_range("Cat Jump", "T J"), Some((2, 5)));
    }

    #[test]
    fn test_find_match_range_uses_char_indices() {
        assert_eq!(find_match_range("Crème Brûlée", "brû"), Some((6, 9)));
    }

    #[test]
    fn test_find_match_range_empty_query() {
        assert_eq!(find_match_range("anything", ""), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a lon...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij kl", 4), vec!["abcd", "efgh", "ij", "kl"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("words", 0).is_empty());
    }

    #[test]
    fn test_format_age() {
        let now = 1_700_000_000;
        assert_eq!(format_age(now, now), "just now");
        assert_eq!(format_age(now - 300, now), "5m ago");
        assert_eq!(format_age(now - 3 * 3600, now), "3h ago");
        assert_eq!(format_age(now - 7 * 86400, now), "7d ago");
    }
}
