//! OpenTelemetry tracing pipeline
//!
//! Installs a `tracing` subscriber with console output and, when enabled,
//! an OTLP span exporter. Handlers and clients instrument themselves with
//! `tracing` spans; swapping or disabling the exporter never touches the
//! request-handling code, and tests can install their own subscriber.

use std::time::Duration;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for telemetry/tracing
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Whether OTLP span export is enabled
    #[serde(default)]
    pub enabled: bool,

    /// OTLP endpoint URL (gRPC)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Service name attached to exported spans
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Span export timeout in seconds
    #[serde(default = "default_export_timeout")]
    pub export_timeout_secs: u64,

    /// Log level filter (e.g. "info", "gateway_http=debug,tower_http=info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Fall back to console-only logging when the collector is unavailable.
    /// Set to `false` to make a missing collector fatal at startup.
    #[serde(default = "default_graceful_fallback")]
    pub graceful_fallback: bool,
}

fn default_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_service_name() -> String {
    "ceptemp".to_string()
}

const fn default_export_timeout() -> u64 {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

const fn default_graceful_fallback() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_endpoint(),
            service_name: default_service_name(),
            export_timeout_secs: default_export_timeout(),
            log_filter: default_log_filter(),
            graceful_fallback: default_graceful_fallback(),
        }
    }
}

/// Guard that shuts down the tracer provider when dropped, flushing any
/// spans still in the batch queue.
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl std::fmt::Debug for TelemetryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryGuard")
            .field("active", &self.provider.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                tracing::error!("Failed to shutdown tracer provider: {e:?}");
            }
        }
    }
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize the tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Failed to create the OTLP exporter
    #[error("Failed to create OTLP exporter: {0}")]
    Exporter(String),
}

/// Initialize telemetry with the given configuration.
///
/// Returns a guard that must be kept alive for the lifetime of the process;
/// dropping it shuts the tracer provider down.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    if !config.enabled {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;

        info!("Telemetry initialized (OTLP disabled, console only)");
        return Ok(TelemetryGuard { provider: None });
    }

    let exporter_result = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&config.endpoint)
        .with_timeout(Duration::from_secs(config.export_timeout_secs))
        .build();

    match exporter_result {
        Ok(exporter) => {
            let resource = Resource::builder()
                .with_service_name(config.service_name.clone())
                .build();

            let provider = SdkTracerProvider::builder()
                .with_batch_exporter(exporter)
                .with_resource(resource)
                .build();

            let tracer = provider.tracer(config.service_name.clone());

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .with(OpenTelemetryLayer::new(tracer))
                .try_init()
                .map_err(|e| TelemetryError::Init(e.to_string()))?;

            info!(
                endpoint = %config.endpoint,
                service = %config.service_name,
                "Telemetry initialized with OTLP export"
            );

            Ok(TelemetryGuard {
                provider: Some(provider),
            })
        },
        Err(e) => {
            if config.graceful_fallback {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()
                    .map_err(|e| TelemetryError::Init(e.to_string()))?;

                warn!(
                    endpoint = %config.endpoint,
                    error = %e,
                    "OTLP collector unavailable, console-only logging"
                );
                Ok(TelemetryGuard { provider: None })
            } else {
                Err(TelemetryError::Exporter(e.to_string()))
            }
        },
    }
}
