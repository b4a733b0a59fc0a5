//! Composable UI component renderers.
//!
//! Each component draws one part of the quiz card and returns the next free
//! row, so layouts read top to bottom.
//!
//! # Components
//!
//! - `header`: Question label and progress counter
//! - `poster`: Framed movie title carrying answer feedback
//! - `prompt`: Question text
//! - `buttons`: "Нет" / "Да" answer buttons
//! - `footer`: Key hints
//! - `dialog`: End-of-round result box
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::AppState;
//! use movie_quiz::domain::{catalog, QuizSession};
//! use movie_quiz::ui::components::render_question_card;
//! use movie_quiz::ui::Theme;
//!
//! let session = QuizSession::new(catalog::default_questions())?;
//! let state = AppState::new(session, Theme::default(), 0.6);
//! render_question_card(&state.compute_viewmodel(24, 80), &state.theme, 80, 24);
//! # Ok::<(), movie_quiz::MovieQuizError>(())
//! ```

mod buttons;
mod dialog;
mod footer;
mod header;
mod poster;
mod prompt;

pub use dialog::render_dialog;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::QuizViewModel;

use buttons::render_buttons;
use footer::render_footer;
use header::render_header;
use poster::render_poster;
use prompt::render_prompt;

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the question card.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Poster - fills free rows]
/// [blank]
/// [Prompt]
/// [blank]
/// [Buttons]
/// [blank padding]
/// [Border]
/// [Footer]
/// ```
pub fn render_question_card(vm: &QuizViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_poster(current_row, &vm.poster, theme, cols);
    current_row = render_prompt(current_row + 1, &vm.prompt, theme, cols);
    let _current_row = render_buttons(current_row + 1, &vm.buttons, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
