//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub(super) const SERVICE_NAME: &str = "MovieQuiz";

const TRACE_FILE: &str = "movie-quiz-otlp.json";

/// Installs the global tracing subscriber when `config.trace_level` is set.
///
/// The level string is an `EnvFilter` directive, so both `debug` and
/// `movie_quiz::domain=trace` work. An unparsable directive falls back to
/// `info`. Failing to create the data directory leaves tracing disabled, and
/// calling this more than once keeps the first subscriber.
///
/// ```rust,no_run
/// use movie_quiz::observability::init_tracing;
/// use movie_quiz::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("quiz tracing active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.as_deref() else {
        return;
    };

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
