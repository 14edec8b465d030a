//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros used throughout the crate to an OpenTelemetry
//! pipeline ending in the file-based span exporter.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based span export.
///
/// The filter level comes from `config.trace_level` (default `"info"`).
/// Spans land in `<data dir>/navkit-otlp.json`. Initialization is best-effort
/// and idempotent: if the data directory cannot be created, or a subscriber
/// is already installed, the function returns silently: observability is
/// optional and must never take the navigation bar down with it.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "navkit")]);
    let trace_file = data_dir.join("navkit-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("navkit");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
