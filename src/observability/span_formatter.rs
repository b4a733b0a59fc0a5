//! Serialization of finished spans into OTLP/JSON documents.
//!
//! One exported batch becomes one `{"resourceSpans": [...]}` document, the
//! shape accepted by `otel-cli`, Jaeger's file import and the collector's
//! `otlpjsonfile` receiver.

use super::init::SERVICE_NAME;
use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as Json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Formatter carrying the resource attributes stamped on every batch.
pub struct OtlpJson {
    resource: Resource,
}

impl OtlpJson {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn batch(&self, spans: &[SpanData]) -> Json {
        let resource: Vec<Json> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource },
                "scopeSpans": [{
                    "scope": { "name": SERVICE_NAME },
                    "spans": spans.iter().map(span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

fn span(span: &SpanData) -> Json {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    let events: Vec<Json> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": events,
        "status": { "code": code, "message": message },
    })
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(list: &[KeyValue]) -> Vec<Json> {
    list.iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> Json {
    let value = match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        // OTLP/JSON encodes 64-bit integers as strings.
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    };
    json!({ "key": key, "value": value })
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

impl std::fmt::Debug for OtlpJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpJson")
            .field("resource_attributes", &self.resource.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn integers_are_strings() {
        let json = attribute("score", &Value::I64(7));
        assert_eq!(json["value"]["intValue"], "7");
    }

    #[test]
    fn strings_and_bools_keep_their_type() {
        assert_eq!(
            attribute("movie", &Value::from("Tesla"))["value"]["stringValue"],
            "Tesla"
        );
        assert_eq!(
            attribute("correct", &Value::Bool(true))["value"]["boolValue"],
            true
        );
    }

    #[test]
    fn timestamps_are_epoch_nanos() {
        let t = UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(t), "1500000000");
    }

    #[test]
    fn empty_batch_carries_resource() {
        let format = OtlpJson::new(Resource::new(vec![KeyValue::new(
            "service.name",
            SERVICE_NAME,
        )]));
        let doc = format.batch(&[]);

        let group = &doc["resourceSpans"][0];
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], SERVICE_NAME);
        assert!(group["scopeSpans"][0]["spans"].as_array().unwrap().is_empty());
        assert!(group["resource"]["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|kv| kv["value"]["stringValue"] == SERVICE_NAME));
    }
}
