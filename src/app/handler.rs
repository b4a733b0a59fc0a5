//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where the quiz moves forward. It takes
//! an [`Event`] produced by the plugin shim, mutates [`AppState`] and returns
//! whether to re-render together with the [`Action`]s the shim must execute.
//!
//! # Round Flow
//!
//! ```text
//!  Question/Accepting ── Answer ──► Question/Locked (feedback frame)
//!          ▲                              │ FeedbackElapsed
//!          └──────────────────────────────┘
//!
//!  Question/Accepting ── Answer (last) ──► Result/Locked
//!          ▲                                    │ PlayAgain
//!          └────────────────────────────────────┘
//! ```
//!
//! Answers arriving while input is locked are dropped, so each question is
//! scored exactly once even if keys are mashed during the feedback delay.
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::{handle_event, Action, AppState, Event};
//! use movie_quiz::domain::{catalog, QuizSession};
//! use movie_quiz::ui::Theme;
//!
//! let session = QuizSession::new(catalog::default_questions())?;
//! let mut state = AppState::new(session, Theme::default(), 0.6);
//! let (render, actions) = handle_event(&mut state, &Event::Answer(true))?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::ScheduleTimeout { seconds: 0.6 }]);
//! # Ok::<(), movie_quiz::MovieQuizError>(())
//! ```

use super::modes::{AnswerFeedback, InputMode, Screen};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Progress, RoundResult};

/// Events triggered by user input or timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user pressed one of the answer buttons (`true` for "yes").
    Answer(bool),
    /// The feedback timer fired.
    FeedbackElapsed,
    /// The user confirmed the result dialog.
    PlayAgain,
    /// The user asked to hide the quiz.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Ignored events return `(false, vec![])`.
///
/// # Errors
///
/// Propagates [`MovieQuizError::RoundFinished`](crate::MovieQuizError::RoundFinished)
/// if an answer reaches a finished session. Input gating keeps this from
/// happening during normal play.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Answer(answer) => {
            if !state.accepts_answers() {
                tracing::debug!(
                    input_mode = ?state.input_mode,
                    screen = ?state.screen,
                    "answer ignored while input is locked"
                );
                return Ok((false, vec![]));
            }

            let outcome = state.session.record_answer(*answer)?;
            state.input_mode = InputMode::Locked;
            state.feedback = Some(AnswerFeedback::from_correctness(outcome.is_correct));
            state.pending_timers += 1;

            if let Progress::Finished { score } = outcome.progress {
                let result = RoundResult {
                    score,
                    total: state.session.total(),
                };
                tracing::debug!(%result, "round finished");
                state.screen = Screen::Result(result);
            }

            Ok((
                true,
                vec![Action::ScheduleTimeout {
                    seconds: state.feedback_delay,
                }],
            ))
        }
        Event::FeedbackElapsed => {
            state.pending_timers = state.pending_timers.saturating_sub(1);
            if state.pending_timers > 0 {
                tracing::debug!(
                    pending_timers = state.pending_timers,
                    "stale feedback timer, waiting for the latest one"
                );
                return Ok((false, vec![]));
            }

            let had_feedback = state.feedback.take().is_some();

            if state.screen == Screen::Question && state.input_mode == InputMode::Locked {
                tracing::debug!(
                    question = %state.session.question_number(),
                    "showing next question"
                );
                state.input_mode = InputMode::Accepting;
                return Ok((true, vec![]));
            }

            Ok((had_feedback, vec![]))
        }
        Event::PlayAgain => {
            if !matches!(state.screen, Screen::Result(_)) {
                return Ok((false, vec![]));
            }

            tracing::debug!("starting a new round");
            state.session.reset();
            state.screen = Screen::Question;
            state.input_mode = InputMode::Accepting;
            state.feedback = None;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{catalog, Question, QuizSession};
    use crate::ui::Theme;

    fn state() -> AppState {
        let session = QuizSession::new(catalog::default_questions()).unwrap();
        AppState::new(session, Theme::default(), 0.6)
    }

    fn answer_and_wait(state: &mut AppState, answer: bool) {
        handle_event(state, &Event::Answer(answer)).unwrap();
        handle_event(state, &Event::FeedbackElapsed).unwrap();
    }

    #[test]
    fn answer_locks_input_and_schedules_feedback_timer() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Answer(true)).unwrap();

        assert!(render);
        assert_eq!(actions, vec![Action::ScheduleTimeout { seconds: 0.6 }]);
        assert_eq!(state.input_mode, InputMode::Locked);
        assert_eq!(state.feedback, Some(AnswerFeedback::Correct));
        assert_eq!(state.session.score(), 1);
        assert_eq!(state.session.current_index(), 1);
    }

    #[test]
    fn wrong_answer_shows_incorrect_feedback() {
        let mut state = state();
        handle_event(&mut state, &Event::Answer(false)).unwrap();
        assert_eq!(state.feedback, Some(AnswerFeedback::Incorrect));
        assert_eq!(state.session.score(), 0);
    }

    #[test]
    fn answers_during_feedback_are_dropped() {
        let mut state = state();
        handle_event(&mut state, &Event::Answer(true)).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Answer(true)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.session.current_index(), 1);
        assert_eq!(state.session.score(), 1);
    }

    #[test]
    fn feedback_timer_unlocks_next_question() {
        let mut state = state();
        handle_event(&mut state, &Event::Answer(true)).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::FeedbackElapsed).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.input_mode, InputMode::Accepting);
        assert!(state.feedback.is_none());
        assert_eq!(state.pending_timers, 0);
    }

    #[test]
    fn last_answer_opens_result_dialog() {
        let mut state = state();
        let answers: Vec<bool> = state
            .session
            .questions()
            .iter()
            .map(Question::correct_answer)
            .collect();

        for &answer in &answers[..9] {
            answer_and_wait(&mut state, answer);
        }
        assert_eq!(state.screen, Screen::Question);

        handle_event(&mut state, &Event::Answer(!answers[9])).unwrap();
        assert_eq!(
            state.screen,
            Screen::Result(RoundResult { score: 9, total: 10 })
        );
        assert_eq!(state.input_mode, InputMode::Locked);

        // the feedback timer clears the frame but keeps the dialog up
        let (render, _) = handle_event(&mut state, &Event::FeedbackElapsed).unwrap();
        assert!(render);
        assert!(state.feedback.is_none());
        assert_eq!(state.input_mode, InputMode::Locked);
        assert!(matches!(state.screen, Screen::Result(_)));
    }

    #[test]
    fn answers_on_result_screen_are_ignored() {
        let mut state = state();
        for _ in 0..10 {
            answer_and_wait(&mut state, true);
        }

        let (render, actions) = handle_event(&mut state, &Event::Answer(true)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.session.score(), 6);
    }

    #[test]
    fn play_again_resets_round() {
        let mut state = state();
        for _ in 0..10 {
            answer_and_wait(&mut state, true);
        }

        let (render, actions) = handle_event(&mut state, &Event::PlayAgain).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Question);
        assert_eq!(state.input_mode, InputMode::Accepting);
        assert_eq!(state.session.score(), 0);
        assert_eq!(state.session.question_number(), "1/10");
    }

    #[test]
    fn play_again_mid_round_is_ignored() {
        let mut state = state();
        answer_and_wait(&mut state, true);

        let (render, _) = handle_event(&mut state, &Event::PlayAgain).unwrap();
        assert!(!render);
        assert_eq!(state.session.current_index(), 1);
    }

    #[test]
    fn stale_timer_from_previous_round_does_not_unlock_early() {
        let mut state = state();
        for _ in 0..9 {
            answer_and_wait(&mut state, true);
        }
        // last answer leaves its timer pending while the user replays at once
        handle_event(&mut state, &Event::Answer(false)).unwrap();
        handle_event(&mut state, &Event::PlayAgain).unwrap();
        handle_event(&mut state, &Event::Answer(true)).unwrap();
        assert_eq!(state.pending_timers, 2);

        let (render, _) = handle_event(&mut state, &Event::FeedbackElapsed).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Locked);

        handle_event(&mut state, &Event::FeedbackElapsed).unwrap();
        assert_eq!(state.input_mode, InputMode::Accepting);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn unexpected_timer_is_harmless() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::FeedbackElapsed).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Accepting);
    }
}
