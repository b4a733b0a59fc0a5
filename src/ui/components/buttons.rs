//! Answer buttons renderer.
//!
//! Draws the "no" and "yes" buttons side by side. While input is locked the
//! buttons lose their background and are dimmed, the terminal counterpart of
//! a disabled button.

use crate::ui::helpers::{center_offset, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ButtonsInfo;

/// Inner width of each button, labels are centred within it.
const BUTTON_WIDTH: usize = 12;

/// Columns between the two buttons.
const BUTTON_GAP: usize = 4;

/// Renders both buttons on `row` and returns the next free row.
pub fn render_buttons(row: usize, buttons: &ButtonsInfo, theme: &Theme, cols: usize) -> usize {
    let total = BUTTON_WIDTH * 2 + BUTTON_GAP;
    let start = center_offset(total, cols) + 1;

    position_cursor(row, start);
    render_button(&buttons.no_label, buttons.enabled, theme);
    print!("{}", " ".repeat(BUTTON_GAP));
    render_button(&buttons.yes_label, buttons.enabled, theme);

    row + 1
}

fn render_button(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.button_fg));
        print!("{}", Theme::bg(&theme.colors.button_bg));
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }

    let label_len = text_width(label).min(BUTTON_WIDTH);
    let left = center_offset(label_len, BUTTON_WIDTH);
    print!("{}{label}", " ".repeat(left));
    print!("{}", " ".repeat(BUTTON_WIDTH.saturating_sub(left + label_len)));
    print!("{}", Theme::reset());
}
