//! Optional OpenTelemetry tracing written to a local JSON file.
//!
//! Spans and events from the quiz (answers, round transitions, config
//! fallbacks) flow through this pipeline:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → QuizSpanExporter → movie-quiz-otlp.json
//! ```
//!
//! Nothing is installed unless the plugin configuration sets `trace_level`.
//! The output file lives in the plugin data directory
//! (`~/.local/share/zellij/movie-quiz/`) and rotates at 10 MB, keeping three
//! timestamped backups.
//!
//! ```rust
//! use movie_quiz::observability::init_tracing;
//! use movie_quiz::Config;
//!
//! // No trace level: a no-op.
//! init_tracing(&Config::default());
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
