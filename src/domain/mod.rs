//! Domain layer for the movie quiz.
//!
//! Everything in here is independent of Zellij and of rendering: the question
//! model, the built-in catalog and the round state machine.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`question`]: Immutable question model
//! - [`catalog`]: Built-in and TOML-loaded question lists
//! - [`session`]: Round progression and scoring
//!
//! # Examples
//!
//! ```
//! use movie_quiz::domain::{catalog, QuizSession, Result};
//!
//! fn play_all_yes() -> Result<usize> {
//!     let mut session = QuizSession::new(catalog::default_questions())?;
//!     while !session.is_finished() {
//!         session.record_answer(true)?;
//!     }
//!     Ok(session.score())
//! }
//!
//! assert_eq!(play_all_yes().unwrap(), 6);
//! ```

pub mod catalog;
pub mod error;
pub mod question;
pub mod session;

pub use error::{MovieQuizError, Result};
pub use question::Question;
pub use session::{AnswerOutcome, Progress, QuizSession, RoundResult, SessionState};
