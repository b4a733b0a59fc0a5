//! Error types for the movie quiz plugin.
//!
//! This module defines the crate-wide error type [`MovieQuizError`] and the
//! [`Result`] alias used throughout the plugin. Errors derive their `Error`
//! implementation through `thiserror`.

use thiserror::Error;

/// The main error type for movie quiz operations.
///
/// Most variants describe configuration problems (an unreadable question file,
/// a broken theme) that the plugin recovers from by falling back to built-in
/// defaults. [`MovieQuizError::RoundFinished`] is different: it reports a
/// caller that kept driving a session after its round ended.
///
/// # Examples
///
/// ```
/// use movie_quiz::domain::MovieQuizError;
///
/// fn load_catalog() -> Result<(), MovieQuizError> {
///     Err(MovieQuizError::Catalog("missing `questions` table".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MovieQuizError {
    /// An answer was recorded after the last question had been answered.
    ///
    /// The round must be reset before the session accepts answers again.
    #[error("round is already finished")]
    RoundFinished,

    /// A session was created without any questions.
    #[error("question catalog is empty")]
    EmptyCatalog,

    /// A question catalog file could not be parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Converts from `std::io::Error` through `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for movie quiz operations.
pub type Result<T> = std::result::Result<T, MovieQuizError>;
