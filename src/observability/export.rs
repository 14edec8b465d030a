//! Span serialization and rotating trace-file output.
//!
//! Spans are written as OTLP-style JSON lines: each line is a complete
//! document with `resourceSpans`, `scopeSpans`, and `spans` arrays, readable
//! by standard trace tooling. The writer caps the trace file's size by
//! renaming it to a single `.old` sibling and starting fresh, which bounds
//! disk usage at roughly twice the cap.

use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Maximum trace file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Trace-file writer with size-capped rotation.
///
/// The file handle opens lazily on first write. When the file exceeds the
/// size cap, it is renamed to `<name>.old` (replacing any previous backup)
/// and a fresh file is started. Guarded by a `Mutex` because the tracing SDK
/// makes no single-thread promise even though the navigation core does.
pub(crate) struct RotatingWriter {
    file_path: PathBuf,
    writer: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub(crate) const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file has outgrown the cap.
    pub(crate) fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("writer mutex poisoned: {e}"))
        })?;

        if self.is_oversized() {
            *writer = None;
            self.rotate()?;
        }

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer.as_mut().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "trace file unavailable")
        })?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_oversized(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }

    fn rotate(&self) -> std::io::Result<()> {
        let backup = self.file_path.with_extension("json.old");
        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Formats a batch of spans as one OTLP-style JSON document.
pub(crate) fn format_batch(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attrs: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| {
            json!({
                "key": key.to_string(),
                "value": format_value(value),
            })
        })
        .collect();

    let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attrs },
            "scopeSpans": [{
                "scope": { "name": "navkit" },
                "spans": spans,
            }]
        }]
    })
}

fn format_span(span: &SpanData) -> JsonValue {
    let attributes: Vec<JsonValue> = span
        .attributes
        .iter()
        .map(|kv| {
            json!({
                "key": kv.key.to_string(),
                "value": format_value(&kv.value),
            })
        })
        .collect();

    let (status_code, status_message) = match &span.status {
        opentelemetry::trace::Status::Unset => (0, String::new()),
        opentelemetry::trace::Status::Ok => (1, String::new()),
        opentelemetry::trace::Status::Error { description } => (2, description.to_string()),
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == opentelemetry::trace::SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes,
        "status": { "code": status_code, "message": status_message },
    })
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

fn format_value(value: &opentelemetry::Value) -> JsonValue {
    use opentelemetry::Value;

    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = RotatingWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn empty_batch_still_produces_a_valid_document() {
        let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "navkit")]);
        let doc = format_batch(&resource, &[]);
        assert!(doc["resourceSpans"][0]["scopeSpans"][0]["spans"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
