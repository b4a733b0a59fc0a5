//! Span exporter that appends OTLP JSON batches to a file.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJson;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one JSON line.
#[derive(Debug)]
struct QuizSpanExporter {
    file: RotatingFile,
    format: OtlpJson,
    stopped: bool,
}

impl SpanExporter for QuizSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("span exporter already shut down"))
        } else {
            let line = self.format.batch(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.format = OtlpJson::new(resource.clone());
    }
}

/// Builds a provider that exports every finished span straight to `path`.
///
/// Uses the simple (synchronous) span processor: the plugin runs on a single
/// WASM thread without an async runtime for a batch processor.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = QuizSpanExporter {
        file: RotatingFile::new(path),
        format: OtlpJson::new(resource.clone()),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
