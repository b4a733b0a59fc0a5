//! Input, screen and feedback state types for the application.
//!
//! These enums decide which keys the handler honours and what the renderer
//! draws:
//! - **Input**: answers are accepted only while [`InputMode::Accepting`]
//! - **Screen**: the question card or the end-of-round result dialog
//! - **Feedback**: the coloured poster frame shown right after an answer
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::modes::{AnswerFeedback, InputMode, Screen};
//!
//! let input = InputMode::Locked;
//! let screen = Screen::Question;
//! let feedback = AnswerFeedback::from_correctness(true);
//! assert_eq!(feedback, AnswerFeedback::Correct);
//! ```

use crate::domain::RoundResult;

/// Whether answer keys are currently honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The current question is visible and waiting for an answer.
    Accepting,

    /// An answer was just given (feedback is showing) or the round is over.
    ///
    /// Answer keys are dropped until the next question is shown, which keeps
    /// a question from being answered twice.
    Locked,
}

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Poster, prompt and the yes/no buttons.
    Question,

    /// End-of-round dialog with the final score and a replay button.
    Result(RoundResult),
}

/// Colour of the poster frame after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    /// The answer was right.
    Correct,
    /// The answer was wrong.
    Incorrect,
}

impl AnswerFeedback {
    /// Maps an answer's correctness to its feedback.
    #[must_use]
    pub const fn from_correctness(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}
