//! Result dialog renderer.
//!
//! Shown over the quiz card once the round is over: a heading, the score line
//! and the replay button, inside a filled box centred on the pane.

use crate::ui::helpers::{center_offset, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DialogInfo;

/// Horizontal padding inside the dialog box.
const PADDING: usize = 3;

/// Renders the dialog centred on a `rows` × `cols` pane.
///
/// # Layout
///
/// ```text
/// [blank]
///     Раунд окончен!
///  Ваш результат: 7/10
/// [blank]
///    Сыграть еще раз
/// [blank]
/// ```
pub fn render_dialog(dialog: &DialogInfo, theme: &Theme, rows: usize, cols: usize) {
    let content_width = [&dialog.title, &dialog.message, &dialog.button]
        .iter()
        .map(|line| text_width(line))
        .max()
        .unwrap_or(0);
    let width = (content_width + PADDING * 2).min(cols);
    let inner = width.saturating_sub(2);
    let fg = theme.colors.dialog_fg.as_str();
    let lines: [(&str, &str, bool); 6] = [
        ("", fg, false),
        (dialog.title.as_str(), fg, true),
        (dialog.message.as_str(), fg, false),
        ("", fg, false),
        (dialog.button.as_str(), theme.colors.dialog_accent.as_str(), true),
        ("", fg, false),
    ];

    let top = center_offset(lines.len(), rows) + 1;
    let col = center_offset(width, cols) + 1;

    for (offset, (text, color, bold)) in lines.iter().enumerate() {
        let text = truncate(text, inner);
        let text_len = text_width(&text);
        let left = center_offset(text_len, width);

        position_cursor(top + offset, col);
        print!("{}", Theme::bg(&theme.colors.dialog_bg));
        print!("{}", Theme::fg(color));
        if *bold {
            print!("{}", Theme::bold());
        }
        print!("{}{text}", " ".repeat(left));
        print!("{}", " ".repeat(width.saturating_sub(left + text_len)));
        print!("{}", Theme::reset());
    }
}
