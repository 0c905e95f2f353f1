//! Tag chip row renderer.
//!
//! Chips are laid out left to right and clipped at the pane edge. The selected
//! chip uses the chip highlight colors; the chip cursor is underlined while the
//! row has focus.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TagBarInfo;

const CHIP_GAP: usize = 1;
const LEFT_MARGIN: usize = 1;

/// Renders the chip row at `row`. Returns the next free row.
pub fn render_tag_bar(row: usize, bar: &TagBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    let mut used = LEFT_MARGIN;

    for chip in &bar.chips {
        let label = format!(" #{} ", chip.label);
        let width = label.chars().count();
        if used + width > cols {
            break;
        }

        if chip.is_selected {
            print!("{}", Theme::fg(&theme.colors.chip_selected_fg));
            print!("{}", Theme::bg(&theme.colors.chip_selected_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.chip_fg));
        }
        if chip.is_cursor {
            print!("{}", Theme::underline());
        }
        print!("{label}");
        print!("{}", Theme::reset());

        print!("{}", " ".repeat(CHIP_GAP));
        used += width + CHIP_GAP;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
