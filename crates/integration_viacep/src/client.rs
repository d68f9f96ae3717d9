//! ViaCEP HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{AddressRecord, ViaCepPayload};

/// Address lookup errors
#[derive(Debug, Error)]
pub enum AddressError {
    /// The provider could not be reached (connect, timeout, aborted transfer)
    #[error("Address service unreachable: {0}")]
    Unreachable(String),

    /// The provider answered with a body that is not a ViaCEP payload
    #[error("Failed to parse address response: {0}")]
    Parse(String),
}

/// ViaCEP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaCepConfig {
    /// Base URL of the ViaCEP API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 5)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://viacep.com.br".to_string()
}

const fn default_timeout() -> u64 {
    5
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Postal-code lookup capability
#[async_trait]
pub trait ZipLookupClient: Send + Sync {
    /// Resolve a postal code to an address record.
    ///
    /// The returned record may be unresolved (see
    /// [`AddressRecord::is_unresolved`]); deciding what that means is the
    /// caller's job.
    async fn lookup(&self, cep: &str) -> Result<AddressRecord, AddressError>;
}

/// ViaCEP HTTP client implementation
#[derive(Debug)]
pub struct ViaCepClient {
    client: Client,
    config: ViaCepConfig,
}

impl ViaCepClient {
    /// Create a new ViaCEP client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ViaCepConfig) -> Result<Self, AddressError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AddressError::Unreachable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, AddressError> {
        Self::new(ViaCepConfig::default())
    }

    fn lookup_url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.config.base_url, cep)
    }
}

#[async_trait]
impl ZipLookupClient for ViaCepClient {
    #[instrument(name = "viacep_request", skip(self), fields(cep = %cep))]
    async fn lookup(&self, cep: &str) -> Result<AddressRecord, AddressError> {
        let url = self.lookup_url(cep);
        debug!(url = %url, "Fetching address");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AddressError::Unreachable(e.to_string()))?;

        // The status code is deliberately not inspected: an unknown CEP is
        // signalled by an empty record body, not by the status.
        let payload: ViaCepPayload = response
            .json()
            .await
            .map_err(|e| AddressError::Parse(e.to_string()))?;

        Ok(AddressRecord::from(payload))
    }
}
