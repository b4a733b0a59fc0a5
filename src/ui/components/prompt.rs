//! Prompt component renderer.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;

/// Renders the question text centred at `row`.
pub fn render_prompt(row: usize, prompt: &str, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print_centered_line(row, prompt, cols);
    row + 1
}
