//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a list of
//! [`Action`]s and the plugin shim turns each one into a Zellij API call, so
//! the whole quiz flow stays testable without a running multiplexer.
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::app::Action;
//!
//! let actions = vec![Action::ScheduleTimeout { seconds: 0.6 }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user asks to leave the quiz (`q` or `Esc`).
    CloseFocus,

    /// Asks Zellij for a `Timer` event after `seconds`.
    ///
    /// Emitted after every answer, the last one included. The timer clears
    /// the feedback frame and, while the round is still running, unlocks
    /// input for the next question.
    ScheduleTimeout {
        /// Delay before the timer fires.
        seconds: f64,
    },
}
