//! Shared rendering utilities.
//!
//! Cursor positioning and width-aware text helpers used by every component.
//! Prompts and dialog text are Cyrillic, so widths are measured in characters
//! rather than bytes.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal columns.
///
/// Counts characters; every glyph the quiz draws is single-width.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max_width` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use movie_quiz::ui::helpers::truncate;
///
/// assert_eq!(truncate("The Ice Age Adventures of Buck Wild", 12), "The Ice A...");
/// assert_eq!(truncate("Old", 12), "Old");
/// ```
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    if text_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().take(max_width).collect();
    }

    let kept: String = text.chars().take(max_width - 3).collect();
    format!("{kept}...")
}

/// Left padding that centres `width` columns inside `cols`.
#[must_use]
pub const fn center_offset(width: usize, cols: usize) -> usize {
    cols.saturating_sub(width) / 2
}

/// Prints `text` centred on `row`, padded with spaces to the full `cols` width.
///
/// The caller sets colours beforehand; the line is reset afterwards.
pub fn print_centered_line(row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = text_width(&text);
    let padding = center_offset(width, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    print!("{}", Theme::reset());
}
