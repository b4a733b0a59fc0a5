//! User interface rendering layer.
//!
//! Turns application state into ANSI output for the Zellij pane:
//!
//! ```text
//! AppState → compute_viewmodel → QuizViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Card parts (header, poster, prompt, buttons, footer, dialog)
//! - [`helpers`]: Cursor and width-aware text utilities
//! - [`theme`]: Colour palettes, frame styles and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{FrameStyle, Theme};
pub use viewmodel::{
    ButtonsInfo, DialogInfo, FooterInfo, FrameTone, HeaderInfo, PosterInfo, QuizViewModel,
};
