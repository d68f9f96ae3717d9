//! WeatherAPI HTTP client

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{WeatherApiPayload, WeatherSample};

/// Weather lookup errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider could not be reached (connect, timeout, aborted transfer)
    #[error("Weather service unreachable: {0}")]
    Unreachable(String),

    /// The provider answered with a body missing `current.temp_c`
    #[error("Failed to parse weather response: {0}")]
    Parse(String),
}

/// WeatherAPI client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiConfig {
    /// Base URL of the WeatherAPI service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.weatherapi.com".to_string()
}

const fn default_timeout() -> u64 {
    5
}

impl WeatherApiConfig {
    /// Build a configuration from an API key, keeping the other defaults
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_secs: default_timeout(),
        }
    }
}

/// Current-weather lookup capability
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Fetch the current temperature for a place name.
    ///
    /// The place name may contain spaces and non-ASCII characters; it is
    /// URL-encoded before being sent.
    async fn current(&self, city: &str) -> Result<WeatherSample, WeatherError>;
}

/// WeatherAPI HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new WeatherAPI client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(name = "weather_request", skip(self), fields(city = %city))]
    async fn current(&self, city: &str) -> Result<WeatherSample, WeatherError> {
        let url = format!("{}/v1/current.json", self.config.base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.expose_secret()),
                ("q", city),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Unreachable(e.to_string()))?;

        // As with the address lookup, the status code is not inspected; a
        // provider error body simply fails to decode.
        let payload: WeatherApiPayload = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        Ok(WeatherSample::from(payload))
    }
}
