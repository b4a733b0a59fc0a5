//! Top-level rendering coordinator.
//!
//! Computes the view model and hands it to the components: the question card
//! is always drawn, and the result dialog is layered on top of it at the end
//! of a round.
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::AppState;
//! use movie_quiz::domain::{catalog, QuizSession};
//! use movie_quiz::ui::{render, Theme};
//!
//! let session = QuizSession::new(catalog::default_questions())?;
//! let state = AppState::new(session, Theme::default(), 0.6);
//! render(&state, 24, 80);
//! # Ok::<(), movie_quiz::MovieQuizError>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::QuizViewModel;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Output
///
/// Prints ANSI-styled output with `print!`. Zellij clears the pane before
/// each render call, so nothing here erases previous frames.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &QuizViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_question_card(vm, theme, cols, rows);

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, rows, cols);
    }
}
