//! Telemetry initialization

mod otel;

pub use otel::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
