//! OpenTelemetry-based observability with file-based trace export.
//!
//! Event handling and lock transitions are instrumented with `tracing` spans;
//! this module wires those spans to an OTLP-style JSON file so embeddings can
//! inspect traces offline. There is no collector endpoint; a navigation bar
//! has nowhere to ship telemetry, so the file is the sink.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Trace level resolution: `config.trace_level`, defaulting to `"info"`.
//! Output: `<data dir>/navkit-otlp.json`, rotated at 10 MB with one backup.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `export`: Span JSON serialization and the rotating writer

mod export;
mod init;
mod tracer;

pub use init::init_tracing;
