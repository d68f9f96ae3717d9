//! Upstream integration settings: weather provider and the resolver hop.

use integration_weatherapi::WeatherApiConfig;
use secrecy::SecretString;
use serde::Deserialize;

/// Weather provider settings as they appear in the config file.
///
/// The API key is optional here so that a config file without one still
/// deserializes; the resolver binary treats a missing key as fatal at
/// startup.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// API key for the weather provider
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Base URL of the weather provider
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "http://api.weatherapi.com".to_string()
}

const fn default_timeout() -> u64 {
    5
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherSettings {
    /// Convert to the client configuration, or `None` if no API key is set
    pub fn to_client_config(&self) -> Option<WeatherApiConfig> {
        self.api_key.clone().map(|api_key| WeatherApiConfig {
            base_url: self.base_url.clone(),
            api_key,
            timeout_secs: self.timeout_secs,
        })
    }
}

/// Settings for the gateway's hop to the temperature resolver
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverSettings {
    /// Base URL of the resolver service
    #[serde(default = "default_resolver_base_url")]
    pub base_url: String,

    /// Forwarding timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_resolver_base_url() -> String {
    format!("http://127.0.0.1:{}", super::DEFAULT_RESOLVER_PORT)
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            base_url: default_resolver_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn weather_settings_defaults() {
        let settings = WeatherSettings::default();
        assert!(settings.api_key.is_none());
        assert_eq!(settings.base_url, "http://api.weatherapi.com");
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn weather_settings_without_key_yield_no_client_config() {
        let settings = WeatherSettings::default();
        assert!(settings.to_client_config().is_none());
    }

    #[test]
    fn weather_settings_with_key_convert() {
        let settings = WeatherSettings {
            api_key: Some(SecretString::from("abc123")),
            base_url: "http://localhost:9999".to_string(),
            timeout_secs: 2,
        };
        let config = settings.to_client_config().unwrap();
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.api_key.expose_secret(), "abc123");
    }

    #[test]
    fn resolver_settings_defaults() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:8081");
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn weather_settings_deserialize_partial() {
        let settings: WeatherSettings =
            serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert!(settings.api_key.is_some());
        assert_eq!(settings.base_url, "http://api.weatherapi.com");
    }
}
