//! Tracing setup with OpenTelemetry spans exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → RotatingFile
//! ```
//!
//! Each exported batch is one OTLP JSON document on its own line in
//! `reelbox-otlp.json` inside the plugin data directory. The file rotates at a
//! size limit, keeping numbered backups (`reelbox-otlp.json.1` is the newest).
//!
//! The filter level comes from the `trace_level` plugin option and defaults to
//! `info`. Failures to set up the file are ignored; the plugin runs without
//! traces.

mod exporter;
mod rotation;

pub use exporter::{create_tracer_provider, format_batch};
pub use rotation::RotatingFile;

use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "reelbox";

const TRACE_FILE_NAME: &str = "reelbox-otlp.json";

/// Installs the global tracing subscriber.
///
/// Only the first call in a process takes effect.
///
/// ```rust,no_run
/// use reelbox::observability::init_tracing;
/// use reelbox::Config;
///
/// init_tracing(&Config { trace_level: Some("debug".to_string()), ..Config::default() });
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = create_tracer_provider(RotatingFile::new(data_dir.join(TRACE_FILE_NAME)), resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
