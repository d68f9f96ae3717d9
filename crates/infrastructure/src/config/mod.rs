//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP listener settings
//! - `integrations`: weather provider and resolver-hop settings
//!
//! Both binaries load the same [`AppConfig`]: defaults, then an optional
//! `config.toml`, then `CEPTEMP_*` environment variables (sections joined
//! with `__`, e.g. `CEPTEMP_WEATHER__API_KEY`).

mod integrations;
mod server;

use serde::Deserialize;

pub use integrations::{ResolverSettings, WeatherSettings};
pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;
pub use integration_viacep::ViaCepConfig;

/// Default listen port of the input gateway
pub const DEFAULT_GATEWAY_PORT: u16 = 8080;

/// Default listen port of the temperature resolver
pub const DEFAULT_RESOLVER_PORT: u16 = 8081;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// ViaCEP lookup settings (resolver only)
    #[serde(default)]
    pub viacep: ViaCepConfig,

    /// Weather provider settings (resolver only)
    #[serde(default)]
    pub weather: WeatherSettings,

    /// Resolver-hop settings (gateway only)
    #[serde(default)]
    pub resolver: ResolverSettings,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml` and
    /// `CEPTEMP_*` environment variables.
    ///
    /// `service_name` and `default_port` seed the per-service defaults so
    /// the two binaries can share one config shape.
    pub fn load(service_name: &str, default_port: u16) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.port", i64::from(default_port))?
            .set_default("telemetry.service_name", service_name)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("CEPTEMP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, DEFAULT_GATEWAY_PORT);
        assert!(!config.telemetry.enabled);
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn app_config_deserializes_partial_sections() {
        let json = r#"{"server":{"port":9000},"weather":{"api_key":"k"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.weather.api_key.is_some());
        assert_eq!(config.resolver.base_url, "http://127.0.0.1:8081");
    }

    #[test]
    fn app_config_empty_object_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.viacep.base_url, "https://viacep.com.br");
        assert_eq!(config.viacep.timeout_secs, 5);
        assert_eq!(config.weather.base_url, "http://api.weatherapi.com");
    }

    #[test]
    fn default_ports_differ_per_service() {
        assert_ne!(DEFAULT_GATEWAY_PORT, DEFAULT_RESOLVER_PORT);
    }
}
