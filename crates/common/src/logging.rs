//! Logging and OpenTelemetry tracing setup for the staking panel binaries.
use std::env;

use opentelemetry::{trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use tracing::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Environment variable holding the OTLP collector endpoint.
pub const OTLP_URL_ENVVAR: &str = "STAKING_PANEL_OTLP_URL";

/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "STAKING_PANEL_SVC_LABEL";

/// Configuration for the logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Identifies the process in logs and exported spans.
    whoami: String,

    /// The OpenTelemetry URL for exporting traces.
    otel_url: Option<String>,
}

impl LoggerConfig {
    /// Creates a new instance with only the whoami set.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
        }
    }

    /// Creates a new instance whose whoami is derived from `base` and the service label envvar.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Sets the opentelemetry URL; `None` disables OTLP export.
    pub fn with_otlp_url(mut self, url: Option<String>) -> Self {
        self.otel_url = url;
        self
    }

    /// The whoami string used in logs.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }

    /// The OTLP endpoint, if exporting is enabled.
    pub fn otlp_url(&self) -> Option<&str> {
        self.otel_url.as_deref()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(staking-panel)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Calling this more than once (e.g. from several tests in one binary) keeps the first subscriber.
pub fn init(config: LoggerConfig) {
    let filt = tracing_subscriber::EnvFilter::from_default_env();

    let log_file = env::var("LOG_FILE").is_ok_and(|v| v == "1");
    let log_line_num = env::var("LOG_LINE_NUM").is_ok_and(|v| v == "1");

    let stdout_sub = tracing_subscriber::fmt::layer()
        .compact()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_file(log_file)
                .with_line_number(log_line_num),
        )
        .with_filter(filt);

    let installed = if let Some(otel_url) = &config.otel_url {
        let resource = Resource::builder()
            .with_attribute(KeyValue::new("service.name", config.whoami.clone()))
            .build();

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(otel_url)
            .build()
            .expect("must be able to initialize exporter");

        let tp = opentelemetry_sdk::trace::SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build();

        let tracer = tp.tracer("staking-panel");

        let otel_sub = tracing_opentelemetry::layer().with_tracer(tracer);

        tracing_subscriber::registry()
            .with(stdout_sub)
            .with(otel_sub)
            .try_init()
    } else {
        tracing_subscriber::registry().with(stdout_sub).try_init()
    };

    if installed.is_ok() {
        info!(whoami = %config.whoami, "logging started");
    }
}

/// Gets the OTLP URL from the standard envvar.
pub fn get_otlp_url_from_env() -> Option<String> {
    env::var(OTLP_URL_ENVVAR).ok()
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    whoami_with_label(base, get_service_label_from_env())
}

fn whoami_with_label(base: &str, label: Option<String>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
