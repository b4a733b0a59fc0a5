//! Application state management and view model computation.
//!
//! [`AppState`] wraps the domain [`QuizSession`] with everything the screen
//! needs on top of it: whether answers are accepted right now, which screen is
//! up, the feedback frame of the last answer and the active theme. It is the
//! single owner of the session for the lifetime of the plugin pane.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a
//! [`QuizViewModel`](crate::ui::viewmodel::QuizViewModel), sizing the poster
//! to the pane and choosing the frame tone, button state and footer hints.
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::AppState;
//! use movie_quiz::domain::{catalog, QuizSession};
//! use movie_quiz::ui::Theme;
//!
//! let session = QuizSession::new(catalog::default_questions())?;
//! let state = AppState::new(session, Theme::default(), 0.6);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.counter, "1/10");
//! # Ok::<(), movie_quiz::MovieQuizError>(())
//! ```

use super::modes::{AnswerFeedback, InputMode, Screen};
use crate::domain::{Question, QuizSession};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ButtonsInfo, DialogInfo, FooterInfo, FrameTone, HeaderInfo, PosterInfo, QuizViewModel,
};

/// Rows taken by everything except the poster.
///
/// Top margin, header, border, blank, prompt, blank, buttons, blank, border,
/// footer.
const CHROME_ROWS: usize = 10;

/// Smallest poster that still fits a framed title line.
const MIN_POSTER_ROWS: usize = 3;

/// Widest the poster frame grows on large panes.
const MAX_POSTER_COLS: usize = 56;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The round being played.
    pub session: QuizSession,

    /// Whether answer keys are honoured.
    pub input_mode: InputMode,

    /// Screen currently on display.
    pub screen: Screen,

    /// Frame colour left by the most recent answer, cleared by the feedback timer.
    pub feedback: Option<AnswerFeedback>,

    /// Feedback timers requested but not yet fired.
    ///
    /// Only the last outstanding timer clears feedback, so a timer left over
    /// from a previous round cannot cut the current feedback short.
    pub pending_timers: usize,

    /// Seconds the feedback frame stays up before the next question.
    pub feedback_delay: f64,

    /// Color scheme and frame style for rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a state showing the session's first question with input enabled.
    #[must_use]
    pub fn new(session: QuizSession, theme: Theme, feedback_delay: f64) -> Self {
        Self {
            session,
            input_mode: InputMode::Accepting,
            screen: Screen::Question,
            feedback: None,
            pending_timers: 0,
            feedback_delay,
            theme,
        }
    }

    /// Returns `true` if an answer key would be recorded right now.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.input_mode == InputMode::Accepting && self.screen == Screen::Question
    }

    /// The question drawn on the card.
    ///
    /// Once the round finishes the last question stays on screen behind the
    /// result dialog.
    #[must_use]
    pub fn displayed_question(&self) -> Option<&Question> {
        self.session
            .current_question()
            .or_else(|| self.session.questions().get(self.session.current_index()))
    }

    /// Computes a renderable view model from current state and pane size.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height in character cells
    /// * `cols` - Pane width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> QuizViewModel {
        let (image, prompt) = self
            .displayed_question()
            .map_or((String::new(), String::new()), |q| {
                (q.image().to_string(), q.text().to_string())
            });

        let poster = PosterInfo {
            title: image,
            tone: self.compute_frame_tone(),
            height: rows.saturating_sub(CHROME_ROWS).max(MIN_POSTER_ROWS),
            width: cols.saturating_sub(4).min(MAX_POSTER_COLS),
        };

        QuizViewModel {
            header: self.compute_header(),
            poster,
            prompt,
            buttons: ButtonsInfo {
                no_label: "Нет".to_string(),
                yes_label: "Да".to_string(),
                enabled: self.accepts_answers(),
            },
            footer: self.compute_footer(),
            dialog: self.compute_dialog(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: "Вопрос:".to_string(),
            counter: self.session.question_number(),
        }
    }

    const fn compute_frame_tone(&self) -> FrameTone {
        match self.feedback {
            Some(AnswerFeedback::Correct) => FrameTone::Correct,
            Some(AnswerFeedback::Incorrect) => FrameTone::Incorrect,
            None => FrameTone::Neutral,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.screen, self.input_mode) {
            (Screen::Result(_), _) => "Enter: сыграть еще раз  q: выйти",
            (Screen::Question, InputMode::Accepting) => "y/→: да  n/←: нет  q: выйти",
            (Screen::Question, InputMode::Locked) => "...  q: выйти",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_dialog(&self) -> Option<DialogInfo> {
        match self.screen {
            Screen::Result(result) => Some(DialogInfo {
                title: "Раунд окончен!".to_string(),
                message: format!("Ваш результат: {result}"),
                button: "Сыграть еще раз".to_string(),
            }),
            Screen::Question => None,
        }
    }
}
