//! Question domain model.
//!
//! A [`Question`] pairs a movie poster identifier with a yes/no prompt about
//! the movie's rating. Questions are immutable once built: the session only
//! ever hands out shared references to them.

use serde::Deserialize;

/// A single true/false quiz question about a movie.
///
/// # Fields
///
/// - `image`: Poster identifier, shown as the movie title in the poster frame
/// - `text`: Prompt shown under the poster
/// - `answer`: The correct answer to the prompt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    image: String,
    text: String,
    answer: bool,
}

impl Question {
    /// Creates a new question.
    ///
    /// # Examples
    ///
    /// ```
    /// use movie_quiz::domain::Question;
    ///
    /// let question = Question::new("Old", "Рейтинг этого фильма больше чем 6?", false);
    /// assert_eq!(question.image(), "Old");
    /// assert!(!question.correct_answer());
    /// ```
    pub fn new(image: impl Into<String>, text: impl Into<String>, answer: bool) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
            answer,
        }
    }

    /// Poster identifier of the movie.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Prompt text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The correct answer.
    #[must_use]
    pub const fn correct_answer(&self) -> bool {
        self.answer
    }

    /// Returns `true` if `answer` matches the correct answer.
    #[must_use]
    pub const fn is_correct(&self, answer: bool) -> bool {
        self.answer == answer
    }
}
