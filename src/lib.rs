//! Movie Quiz: a Zellij plugin that plays a ten-question movie rating quiz.
//!
//! Each question shows a movie and asks whether its rating is above a
//! threshold. The player answers "yes" or "no", the poster frame flashes green
//! or red, and after the tenth answer a dialog shows the score with an option
//! to play again.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Input lock
//! │  - Event handling                                   │  ← Feedback
//! │  - Action emission                                  │  ← Result dialog
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │ Domain (domain/)      │   │ UI Layer (ui/)            │
//! │ - QuizSession         │   │ - Components              │
//! │ - Question, catalog   │   │ - Themes                  │
//! └───────────────────────┘   └───────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans to a rotating JSON file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Questions, catalogs and the round state machine
//! - [`app`]: Events, actions and application state
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox path helpers
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/movie-quiz.wasm" {
//!         theme "yp-dark"
//!         questions_file "~/quiz/questions.toml"
//!         feedback_delay "0.6"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use movie_quiz::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Answer(true))?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), movie_quiz::MovieQuizError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{MovieQuizError, Question, QuizSession, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Seconds between an answer and the next question when not configured.
pub const DEFAULT_FEEDBACK_DELAY: f64 = 0.6;

/// Longest accepted feedback delay in seconds.
pub const MAX_FEEDBACK_DELAY: f64 = 60.0;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name (`yp-dark`, `yp-light`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Path to a TOML question catalog replacing the built-in questions.
    pub questions_file: Option<String>,

    /// Seconds the answer feedback stays up before the next question.
    pub feedback_delay: f64,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...).
    ///
    /// Tracing stays off when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            questions_file: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`, `questions_file`, `trace_level`: taken as-is,
    ///   blank values count as unset; file paths get `~` expanded to `/host`
    /// - `feedback_delay`: seconds as a float; values outside `0..=60`,
    ///   non-finite or unparsable values fall back to 0.6
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use movie_quiz::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "yp-light".to_string());
    /// map.insert("feedback_delay".to_string(), "1.5".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("yp-light"));
    /// assert_eq!(config.feedback_delay, 1.5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let feedback_delay = value("feedback_delay").map_or(DEFAULT_FEEDBACK_DELAY, |raw| {
            parse_delay(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default feedback_delay");
                DEFAULT_FEEDBACK_DELAY
            })
        });

        Self {
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|p| infrastructure::expand_tilde(&p)),
            questions_file: value("questions_file").map(|p| infrastructure::expand_tilde(&p)),
            feedback_delay,
            trace_level: value("trace_level"),
        }
    }
}

fn parse_delay(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|delay| (0.0..=MAX_FEEDBACK_DELAY).contains(delay))
        .ok_or_else(|| {
            MovieQuizError::Config(format!(
                "feedback_delay must be between 0 and {MAX_FEEDBACK_DELAY} seconds, got {raw:?}"
            ))
        })
}

/// Builds the initial application state from configuration.
///
/// Resolves the theme (file, then built-in name, then default) and the
/// question catalog (file, then built-in). Every failure is logged and falls
/// back to the built-in choice, so the quiz always starts.
///
/// # Example
///
/// ```rust
/// use movie_quiz::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.session.total(), 10);
/// assert_eq!(state.theme.name, "yp-dark");
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing movie quiz plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let session = config
        .questions_file
        .as_ref()
        .map_or_else(QuizSession::default, |questions_file| {
            domain::catalog::from_file(questions_file)
                .and_then(QuizSession::new)
                .unwrap_or_else(|e| {
                    tracing::warn!(questions_file = %questions_file, error = %e, "failed to load questions, using built-in catalog");
                    QuizSession::default()
                })
        });

    tracing::debug!(
        theme = %theme.name,
        question_count = session.total(),
        feedback_delay = config.feedback_delay,
        "app state initialized"
    );

    AppState::new(session, theme, config.feedback_delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("theme", "yp-light"),
            ("theme_file", "~/themes/quiz.toml"),
            ("questions_file", "/data/questions.toml"),
            ("feedback_delay", "0.25"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("yp-light"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/quiz.toml"));
        assert_eq!(config.questions_file.as_deref(), Some("/data/questions.toml"));
        assert!((config.feedback_delay - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_feedback_delay_falls_back() {
        for raw in ["soon", "-1", "NaN", "inf", "1e300", "60.5"] {
            let config = Config::from_zellij(&map(&[("feedback_delay", raw)]));
            assert!((config.feedback_delay - DEFAULT_FEEDBACK_DELAY).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn delay_errors_name_the_value() {
        let err = parse_delay("-0.5").unwrap_err();
        assert!(matches!(err, MovieQuizError::Config(_)));
        assert!(err.to_string().contains("-0.5"));
        assert!((parse_delay("0").unwrap()).abs() < f64::EPSILON);
        assert!((parse_delay("60").unwrap() - MAX_FEEDBACK_DELAY).abs() < f64::EPSILON);
        assert!(matches!(parse_delay("1e300"), Err(MovieQuizError::Config(_))));
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_uses_named_theme() {
        let config = Config {
            theme_name: Some("yp-light".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "yp-light");
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "yp-dark");
    }

    #[test]
    fn initialize_loads_question_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[questions]]\nimage = \"Tesla\"\ntext = \"?\"\nanswer = false\n\n\
             [[questions]]\nimage = \"Old\"\ntext = \"?\"\nanswer = false"
        )
        .unwrap();

        let config = Config {
            questions_file: Some(file.path().to_string_lossy().to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.session.total(), 2);
        assert_eq!(state.session.question_number(), "1/2");
    }

    #[test]
    fn initialize_falls_back_on_missing_question_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            questions_file: Some(dir.path().join("nope.toml").to_string_lossy().to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).session, QuizSession::default());
    }
}
