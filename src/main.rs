//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the `movie_quiz` library and Zellij: it turns key
//! presses and timer ticks into library [`Event`]s and carries out the
//! [`Action`]s that come back. All round logic lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! While a question is shown:
//! - `y` / `Right`: Answer "yes"
//! - `n` / `Left`: Answer "no"
//!
//! On the result dialog:
//! - `Enter` / `Space` / `r`: Play again
//!
//! Always:
//! - `q` / `Esc`: Hide the plugin pane

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use movie_quiz::{handle_event, Action, Config, Event, Screen};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: movie_quiz::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: movie_quiz::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the quiz state and subscribes to events.
    ///
    /// The quiz needs no permissions: key presses, timers and hiding its own
    /// pane are available to every plugin.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        movie_quiz::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            theme = ?config.theme_name,
            questions_file = ?config.questions_file,
            feedback_delay = config.feedback_delay,
            "parsed configuration"
        );
        self.app = movie_quiz::initialize(&config);

        subscribe(&[EventType::Key, EventType::Timer]);
        tracing::debug!("plugin load complete");
    }

    /// Handles a Zellij event and returns whether to re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => {
                tracing::trace!(elapsed, "feedback timer fired");
                Event::FeedbackElapsed
            }
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update", event = ?our_event);
        let _guard = span.entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        movie_quiz::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to quiz events for the current screen.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if !key.has_no_modifiers() {
            return None;
        }

        match (key.bare_key, &self.app.screen) {
            (BareKey::Char('q') | BareKey::Esc, _) => Some(Event::CloseFocus),
            (BareKey::Char('y' | 'Y') | BareKey::Right, Screen::Question) => Some(Event::Answer(true)),
            (BareKey::Char('n' | 'N') | BareKey::Left, Screen::Question) => Some(Event::Answer(false)),
            (BareKey::Enter | BareKey::Char(' ' | 'r'), Screen::Result(_)) => Some(Event::PlayAgain),
            _ => None,
        }
    }

    fn execute_action(action: &Action) {
        match action {
            Action::ScheduleTimeout { seconds } => set_timeout(*seconds),
            Action::CloseFocus => hide_self(),
        }
    }
}
