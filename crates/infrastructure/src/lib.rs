//! Infrastructure layer: configuration loading and telemetry setup
//!
//! Both service binaries read the same [`AppConfig`]; each consumes the
//! sections relevant to it. Telemetry is initialized once per process and
//! torn down through the returned guard.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, DEFAULT_GATEWAY_PORT, DEFAULT_RESOLVER_PORT};
pub use telemetry::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
