//! Header component renderer.
//!
//! Draws the question label on the left and the `i/total` counter on the
//! right, mirroring the top bar of the quiz card.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Horizontal inset of the header text.
const INSET: usize = 2;

/// Renders the header bar at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// [inset] Вопрос: [padding] 3/10 [inset]
/// ```
///
/// On panes too narrow for both parts only the counter is kept.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let counter_len = text_width(&header.counter);
    let title_len = text_width(&header.title);
    let show_title = title_len + counter_len + INSET * 2 + 1 <= cols;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    let used = if show_title {
        print!("{}{}", " ".repeat(INSET), header.title);
        INSET + title_len
    } else {
        0
    };

    let gap = cols.saturating_sub(used + counter_len + INSET);
    print!("{}", " ".repeat(gap));
    print!("{}", header.counter);
    print!("{}", " ".repeat(cols.saturating_sub(used + gap + counter_len)));

    print!("{}", Theme::reset());
    row + 1
}
