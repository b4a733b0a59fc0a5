//! Question catalogs.
//!
//! The built-in catalog holds the ten movie rating questions the quiz ships
//! with. A replacement catalog can be loaded from a TOML file:
//!
//! ```toml
//! [[questions]]
//! image = "The Godfather"
//! text = "Рейтинг этого фильма больше чем 6?"
//! answer = true
//! ```

use super::error::{MovieQuizError, Result};
use super::question::Question;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Prompt used by most built-in questions.
const ABOVE_SIX: &str = "Рейтинг этого фильма больше чем 6?";

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<Question>,
}

/// Returns the built-in ten-question catalog.
///
/// The first six movies rate above the asked threshold, the last four do not.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new("The Godfather", ABOVE_SIX, true),
        Question::new("The Dark Knight", "Рейтинг этого фильма больше чем 7?", true),
        Question::new("Kill Bill", "Рейтинг этого фильма больше чем 5?", true),
        Question::new("The Avengers", ABOVE_SIX, true),
        Question::new("Deadpool", ABOVE_SIX, true),
        Question::new("The Green Knight", "Рейтинг этого фильма больше чем 5?", true),
        Question::new("Old", ABOVE_SIX, false),
        Question::new("The Ice Age Adventures of Buck Wild", ABOVE_SIX, false),
        Question::new("Tesla", ABOVE_SIX, false),
        Question::new("Vivarium", ABOVE_SIX, false),
    ]
}

/// Parses a catalog from TOML text.
///
/// # Errors
///
/// Returns [`MovieQuizError::Catalog`] for malformed TOML and
/// [`MovieQuizError::EmptyCatalog`] when no questions are listed.
pub fn from_toml(contents: &str) -> Result<Vec<Question>> {
    let file: CatalogFile =
        toml::from_str(contents).map_err(|e| MovieQuizError::Catalog(e.to_string()))?;

    if file.questions.is_empty() {
        return Err(MovieQuizError::EmptyCatalog);
    }

    Ok(file.questions)
}

/// Loads a catalog from a TOML file.
///
/// # Errors
///
/// Returns [`MovieQuizError::Io`] if the file cannot be read, otherwise the
/// errors of [`from_toml`].
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Question>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading question catalog");

    let contents = fs::read_to_string(path)?;
    let questions = from_toml(&contents)?;

    tracing::debug!(question_count = questions.len(), "question catalog loaded");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_catalog_has_ten_questions() {
        let questions = default_questions();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].image(), "The Godfather");
        assert_eq!(questions[9].image(), "Vivarium");

        let answers: Vec<bool> = questions.iter().map(Question::correct_answer).collect();
        assert_eq!(
            answers,
            [true, true, true, true, true, true, false, false, false, false]
        );
    }

    #[test]
    fn parses_toml_catalog() {
        let questions = from_toml(
            r#"
            [[questions]]
            image = "Tesla"
            text = "Рейтинг этого фильма больше чем 6?"
            answer = false

            [[questions]]
            image = "Deadpool"
            text = "Рейтинг этого фильма больше чем 6?"
            answer = true
            "#,
        )
        .unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1], Question::new("Deadpool", ABOVE_SIX, true));
    }

    #[test]
    fn empty_toml_catalog_is_rejected() {
        assert!(matches!(from_toml(""), Err(MovieQuizError::EmptyCatalog)));
    }

    #[test]
    fn malformed_toml_catalog_is_rejected() {
        let err = from_toml("[[questions]]\nimage = 3").unwrap_err();
        assert!(matches!(err, MovieQuizError::Catalog(_)));
    }

    #[test]
    fn loads_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[questions]]\nimage = \"Old\"\ntext = \"?\"\nanswer = false"
        )
        .unwrap();

        let questions = from_file(file.path()).unwrap();
        assert_eq!(questions, vec![Question::new("Old", "?", false)]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, MovieQuizError::Io(_)));
    }
}
