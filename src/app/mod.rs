//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain
//! session. It owns the input lock, the feedback frame and the result dialog,
//! and leaves every Zellij call to the runtime through [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer → Event → handle_event → AppState mutation → Actions → Zellij calls
//!                                            │
//!                                            └──► compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and round flow
//! - [`modes`]: Input, screen and feedback state types
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{AnswerFeedback, InputMode, Screen};
pub use state::AppState;
