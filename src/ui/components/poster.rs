//! Poster component renderer.
//!
//! The poster is a framed box standing in for the movie still. Its frame
//! colour carries the answer feedback: neutral while a question waits, green
//! or red right after an answer.

use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PosterInfo;

/// Renders the poster frame starting at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
/// ╭──────────────────────╮
/// │                      │
/// │    The Dark Knight   │
/// │                      │
/// ╰──────────────────────╯
/// ```
///
/// The frame is centred horizontally; the title sits on the middle row and is
/// truncated to fit inside the borders.
pub fn render_poster(row: usize, poster: &PosterInfo, theme: &Theme, cols: usize) -> usize {
    let width = poster.width.max(4);
    let height = poster.height.max(3);
    let inner = width - 2;
    let col = center_offset(width, cols) + 1;
    let glyphs = theme.frame.glyphs(poster.tone);
    let frame_fg = Theme::fg(theme.colors.frame(poster.tone));
    let title = truncate(&poster.title, inner.saturating_sub(2));
    let title_row = row + height / 2;

    let horizontal = glyphs.horizontal.to_string().repeat(inner);

    position_cursor(row, col);
    print!("{frame_fg}{}{horizontal}{}", glyphs.top_left, glyphs.top_right);

    for current in row + 1..row + height - 1 {
        position_cursor(current, col);
        print!("{frame_fg}{}", glyphs.vertical);

        if current == title_row {
            let title_len = text_width(&title);
            let left = center_offset(title_len, inner);
            print!("{}", Theme::reset());
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.poster_fg));
            print!("{}{title}", " ".repeat(left));
            print!("{}", " ".repeat(inner.saturating_sub(left + title_len)));
            print!("{}{frame_fg}", Theme::reset());
        } else {
            print!("{}", " ".repeat(inner));
        }

        print!("{}", glyphs.vertical);
    }

    position_cursor(row + height - 1, col);
    print!("{}{horizontal}{}", glyphs.bottom_left, glyphs.bottom_right);
    print!("{}", Theme::reset());

    row + height
}
