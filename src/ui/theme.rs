//! Theme management and ANSI escape sequence generation.
//!
//! A theme is the style configuration of the quiz card: its colour palette
//! and the poster frame style. Built-in themes are compiled in, custom ones
//! are loaded from TOML files.
//!
//! # Built-in Themes
//!
//! - `yp-dark`: Dark card with green/red answer feedback (default)
//! - `yp-light`: Light variant with square poster frame
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//! frame = "rounded"   # or "square"
//!
//! [colors]
//! header_fg = "#ffffff"
//! text_normal = "#ffffff"
//! text_dim = "#aeafb4"
//! border = "#3b3c43"
//! poster_fg = "#ffffff"
//! correct = "#60c2a0"
//! incorrect = "#f56b6c"
//! button_fg = "#1a1b22"
//! button_bg = "#ffffff"
//! dialog_fg = "#1a1b22"
//! dialog_bg = "#ffffff"
//! dialog_accent = "#0a84ff"
//! ```

use crate::domain::error::{MovieQuizError, Result};
use crate::ui::viewmodel::FrameTone;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Colour scheme and frame style for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Poster frame style.
    #[serde(default)]
    pub frame: FrameStyle,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Poster frame corner style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    /// Rounded corners.
    #[default]
    Rounded,
    /// Square corners.
    Square,
}

/// Box-drawing glyphs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl FrameStyle {
    /// Glyphs for this style.
    ///
    /// Feedback frames are always drawn heavy so a coloured answer border
    /// stands out even on terminals with a muted palette.
    #[must_use]
    pub const fn glyphs(self, tone: FrameTone) -> FrameGlyphs {
        match (tone, self) {
            (FrameTone::Correct | FrameTone::Incorrect, _) => FrameGlyphs {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
            },
            (FrameTone::Neutral, Self::Rounded) => FrameGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
            },
            (FrameTone::Neutral, Self::Square) => FrameGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
            },
        }
    }
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Prompt text color.
    pub text_normal: String,
    /// Footer and disabled button color.
    pub text_dim: String,

    /// Separators and the neutral poster frame.
    pub border: String,
    /// Movie title inside the poster.
    pub poster_fg: String,

    /// Poster frame after a right answer.
    pub correct: String,
    /// Poster frame after a wrong answer.
    pub incorrect: String,

    /// Enabled button label.
    pub button_fg: String,
    /// Enabled button background.
    pub button_bg: String,

    /// Dialog text.
    pub dialog_fg: String,
    /// Dialog background.
    pub dialog_bg: String,
    /// Dialog button label.
    pub dialog_accent: String,
}

impl ThemeColors {
    /// Frame colour for a tone.
    #[must_use]
    pub fn frame(&self, tone: FrameTone) -> &str {
        match tone {
            FrameTone::Neutral => &self.border,
            FrameTone::Correct => &self.correct,
            FrameTone::Incorrect => &self.incorrect,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `yp-dark`, `yp-light`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use movie_quiz::ui::Theme;
    ///
    /// let theme = Theme::from_name("yp-light").unwrap();
    /// assert_eq!(theme.name, "yp-light");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "yp-dark" => include_str!("../../themes/yp-dark.toml"),
            "yp-light" => include_str!("../../themes/yp-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MovieQuizError::Io`] if the file cannot be read and
    /// [`MovieQuizError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| MovieQuizError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use movie_quiz::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#60c2a0"), "\u{1b}[38;2;96;194;160m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `yp-dark` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("yp-dark").expect("built-in yp-dark theme should always parse")
    }
}
