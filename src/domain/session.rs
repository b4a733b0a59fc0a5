//! Quiz round progression.
//!
//! [`QuizSession`] owns the ordered question list together with the current
//! position and the running score. It is a two-state machine:
//!
//! ```text
//!              record_answer (i < len - 1)
//!            ┌─────────────────────────────┐
//!            ▼                             │
//!   InProgress(i) ─────────────────────────┘
//!            │
//!            │ record_answer (i == len - 1)
//!            ▼
//!   Finished(score) ──── reset ────► InProgress(0)
//! ```
//!
//! `reset` is valid from any state and always lands on `InProgress(0)` with a
//! zero score. The session performs no I/O and knows nothing about rendering.

use super::error::{MovieQuizError, Result};
use super::question::Question;

/// Where a session currently is within its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at `index`.
    InProgress {
        /// Zero-based index of the question being asked.
        index: usize,
    },
    /// Every question has been answered.
    Finished {
        /// Number of correct answers in the round.
        score: usize,
    },
}

/// What happened to the round after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The round moved on to the question at `index`.
    Advanced {
        /// Zero-based index of the next question.
        index: usize,
    },
    /// The answered question was the last one.
    Finished {
        /// Final number of correct answers.
        score: usize,
    },
}

/// Result of [`QuizSession::record_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the recorded answer matched the question's correct answer.
    pub is_correct: bool,
    /// The transition taken by the session.
    pub progress: Progress,
}

/// Final tally of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Correct answers.
    pub score: usize,
    /// Questions in the round.
    pub total: usize,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// Logical state of one quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    finished: bool,
}

impl Default for QuizSession {
    /// A fresh round over the built-in catalog.
    fn default() -> Self {
        Self {
            questions: super::catalog::default_questions(),
            current_index: 0,
            score: 0,
            finished: false,
        }
    }
}

impl QuizSession {
    /// Starts a round at the first question with a zero score.
    ///
    /// # Errors
    ///
    /// Returns [`MovieQuizError::EmptyCatalog`] if `questions` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_quiz::domain::{catalog, QuizSession, SessionState};
    ///
    /// let session = QuizSession::new(catalog::default_questions())?;
    /// assert_eq!(session.state(), SessionState::InProgress { index: 0 });
    /// assert_eq!(session.total(), 10);
    /// # Ok::<(), movie_quiz::MovieQuizError>(())
    /// ```
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(MovieQuizError::EmptyCatalog);
        }

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            finished: false,
        })
    }

    /// Current state of the round.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Finished { score: self.score }
        } else {
            SessionState::InProgress {
                index: self.current_index,
            }
        }
    }

    /// The question waiting for an answer, or `None` once the round is finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current_index)
    }

    /// Records an answer to the current question and advances the round.
    ///
    /// The score grows by one when `answer` matches the current question. If
    /// the current question is the last one (`index == len - 1`) the session
    /// finishes, otherwise it moves to the next index.
    ///
    /// # Errors
    ///
    /// Returns [`MovieQuizError::RoundFinished`] if the round has already
    /// finished. The session is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_quiz::domain::{Progress, Question, QuizSession};
    ///
    /// let mut session = QuizSession::new(vec![
    ///     Question::new("Kill Bill", "Рейтинг этого фильма больше чем 5?", true),
    /// ])?;
    /// let outcome = session.record_answer(true)?;
    /// assert!(outcome.is_correct);
    /// assert_eq!(outcome.progress, Progress::Finished { score: 1 });
    /// # Ok::<(), movie_quiz::MovieQuizError>(())
    /// ```
    pub fn record_answer(&mut self, answer: bool) -> Result<AnswerOutcome> {
        let question = self
            .current_question()
            .ok_or(MovieQuizError::RoundFinished)?;
        let is_correct = question.is_correct(answer);

        if is_correct {
            self.score += 1;
        }

        let progress = if self.current_index == self.questions.len() - 1 {
            self.finished = true;
            Progress::Finished { score: self.score }
        } else {
            self.current_index += 1;
            Progress::Advanced {
                index: self.current_index,
            }
        };

        tracing::debug!(
            answer,
            is_correct,
            score = self.score,
            progress = ?progress,
            "answer recorded"
        );

        Ok(AnswerOutcome {
            is_correct,
            progress,
        })
    }

    /// Returns the round to the first question with a zero score.
    ///
    /// Never fails and may be called at any point of the round.
    pub fn reset(&mut self) {
        tracing::debug!(
            previous_index = self.current_index,
            previous_score = self.score,
            "session reset"
        );
        self.current_index = 0;
        self.score = 0;
        self.finished = false;
    }

    /// Correct answers so far.
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in the round.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question.
    ///
    /// Stays on the last index once the round is finished.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions answered in this round.
    #[must_use]
    pub const fn answered(&self) -> usize {
        if self.finished {
            self.current_index + 1
        } else {
            self.current_index
        }
    }

    /// Returns `true` once the last question has been answered.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// All questions of the round, in order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// One-based progress label such as `"3/10"`.
    #[must_use]
    pub fn question_number(&self) -> String {
        format!("{}/{}", self.current_index + 1, self.questions.len())
    }

    /// Final tally, available once the round is finished.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.finished.then(|| RoundResult {
            score: self.score,
            total: self.questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::default_questions;

    fn session() -> QuizSession {
        QuizSession::new(default_questions()).unwrap()
    }

    fn correct_answers(session: &QuizSession) -> Vec<bool> {
        session
            .questions()
            .iter()
            .map(Question::correct_answer)
            .collect()
    }

    #[test]
    fn starts_at_first_question_with_zero_score() {
        let session = session();
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.question_number(), "1/10");
        assert_eq!(session.current_question(), session.questions().first());
    }

    #[test]
    fn default_session_uses_built_in_catalog() {
        assert_eq!(QuizSession::default(), session());
    }

    #[test]
    fn rejects_empty_question_list() {
        assert!(matches!(
            QuizSession::new(vec![]),
            Err(MovieQuizError::EmptyCatalog)
        ));
    }

    #[test]
    fn all_correct_scores_ten() {
        let mut session = session();
        let mut last = None;
        for answer in correct_answers(&session) {
            let outcome = session.record_answer(answer).unwrap();
            assert!(outcome.is_correct);
            last = Some(outcome.progress);
        }
        assert_eq!(last, Some(Progress::Finished { score: 10 }));
        assert_eq!(session.state(), SessionState::Finished { score: 10 });
        assert_eq!(session.result(), Some(RoundResult { score: 10, total: 10 }));
    }

    #[test]
    fn first_wrong_then_right_scores_nine_on_tenth_call() {
        let mut session = session();
        let mut answers = correct_answers(&session);
        answers[0] = !answers[0];

        for (call, answer) in answers.into_iter().enumerate() {
            let outcome = session.record_answer(answer).unwrap();
            assert_eq!(outcome.is_correct, call != 0);
            if call < 9 {
                assert_eq!(outcome.progress, Progress::Advanced { index: call + 1 });
                assert!(!session.is_finished());
            } else {
                assert_eq!(outcome.progress, Progress::Finished { score: 9 });
            }
        }
        assert_eq!(session.state(), SessionState::Finished { score: 9 });
    }

    #[test]
    fn reset_mid_round_returns_to_first_question() {
        let mut session = session();
        for _ in 0..5 {
            session.record_answer(true).unwrap();
        }
        assert_eq!(session.state(), SessionState::InProgress { index: 5 });

        session.reset();
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_question(), Some(&default_questions()[0]));
    }

    #[test]
    fn current_question_follows_index_through_round() {
        let questions = default_questions();
        let mut session = session();

        for (i, expected) in questions.iter().enumerate() {
            assert_eq!(session.state(), SessionState::InProgress { index: i });
            assert_eq!(session.current_question(), Some(expected));
            session.record_answer(i % 2 == 0).unwrap();
        }

        assert!(session.is_finished());
        assert_eq!(session.questions(), questions.as_slice());
    }

    #[test]
    fn reset_after_finish_clears_score() {
        let mut session = session();
        for answer in correct_answers(&session) {
            session.record_answer(answer).unwrap();
        }
        session.reset();
        assert_eq!(session.state(), SessionState::InProgress { index: 0 });
        assert_eq!(session.score(), 0);
        assert!(session.result().is_none());
    }

    #[test]
    fn current_question_is_none_when_finished() {
        let mut session = QuizSession::new(vec![Question::new("Tesla", "?", false)]).unwrap();
        session.record_answer(true).unwrap();
        assert!(session.current_question().is_none());
        assert_eq!(session.answered(), 1);
    }

    #[test]
    fn answering_after_finish_is_rejected_without_changes() {
        let mut session = QuizSession::new(vec![Question::new("Vivarium", "?", false)]).unwrap();
        session.record_answer(false).unwrap();

        let err = session.record_answer(false).unwrap_err();
        assert!(matches!(err, MovieQuizError::RoundFinished));
        assert_eq!(session.state(), SessionState::Finished { score: 1 });
    }

    #[test]
    fn single_question_round_finishes_on_first_answer() {
        let mut session = QuizSession::new(vec![Question::new("Old", "?", false)]).unwrap();
        let outcome = session.record_answer(false).unwrap();
        assert_eq!(outcome.progress, Progress::Finished { score: 1 });
    }

    #[test]
    fn round_result_displays_as_fraction() {
        let result = RoundResult { score: 7, total: 10 };
        assert_eq!(result.to_string(), "7/10");
    }
}
