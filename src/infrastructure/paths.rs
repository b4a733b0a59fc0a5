//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

/// Returns the directory holding the plugin's trace files.
///
/// Resolves to `/host/.local/share/zellij/movie-quiz`, i.e.
/// `~/.local/share/zellij/movie-quiz` on the host.
///
/// # Examples
///
/// ```
/// use movie_quiz::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/movie-quiz")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("movie-quiz")
}

/// Maps `~`-prefixed paths onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use movie_quiz::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/quiz/questions.toml"), "/host/quiz/questions.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/quiz.toml"), "/etc/quiz.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
