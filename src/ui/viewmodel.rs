//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and sizes only; every decision
//! about the round has already been made by the time one is built.
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::ui::viewmodel::{FrameTone, PosterInfo};
//!
//! let poster = PosterInfo {
//!     title: "Deadpool".to_string(),
//!     tone: FrameTone::Correct,
//!     height: 12,
//!     width: 40,
//! };
//! assert_eq!(poster.tone, FrameTone::Correct);
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct QuizViewModel {
    /// Title and question counter.
    pub header: HeaderInfo,

    /// Framed movie poster.
    pub poster: PosterInfo,

    /// Question text shown under the poster.
    pub prompt: String,

    /// The yes/no buttons.
    pub buttons: ButtonsInfo,

    /// Key hints.
    pub footer: FooterInfo,

    /// End-of-round dialog, drawn over the card when present.
    pub dialog: Option<DialogInfo>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Left-aligned label.
    pub title: String,

    /// Right-aligned progress such as `"3/10"`.
    pub counter: String,
}

/// Colour of the poster frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTone {
    /// Regular border colour.
    Neutral,
    /// Last answer was right.
    Correct,
    /// Last answer was wrong.
    Incorrect,
}

/// Poster frame information.
#[derive(Debug, Clone)]
pub struct PosterInfo {
    /// Movie title drawn in the middle of the frame.
    pub title: String,

    /// Frame colour.
    pub tone: FrameTone,

    /// Frame height in rows, borders included.
    pub height: usize,

    /// Frame width in columns, borders included.
    pub width: usize,
}

/// Answer button information.
#[derive(Debug, Clone)]
pub struct ButtonsInfo {
    /// Label of the "no" button.
    pub no_label: String,

    /// Label of the "yes" button.
    pub yes_label: String,

    /// Whether the buttons accept input; disabled buttons are drawn dimmed.
    pub enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Result dialog information.
#[derive(Debug, Clone)]
pub struct DialogInfo {
    /// Dialog heading.
    pub title: String,

    /// Score line, e.g. `"Ваш результат: 7/10"`.
    pub message: String,

    /// Replay button label.
    pub button: String,
}
