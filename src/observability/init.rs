//! Tracing initialization and subscriber setup.
//!
//! Wires the tracing subscriber to OpenTelemetry with file export: spans
//! pass the configured level filter, get converted to OTLP JSON, and are
//! appended to a rotating trace file in the plugin's data directory.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "Memefinder";

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Level resolution: `config.trace_level` if set, `"info"` otherwise.
/// Traces land in `memefinder-otlp.json` inside the plugin data directory.
///
/// Observability is optional: if the data directory cannot be created the
/// function returns silently, and repeated calls after the first are no-ops
/// (`try_init` keeps the first subscriber).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let trace_file = data_dir.join("memefinder-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
