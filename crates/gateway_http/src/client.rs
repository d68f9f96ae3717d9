//! Forwarding client for the temperature resolver hop

use bytes::Bytes;
use domain::ZipCodeRequest;
use infrastructure::config::ResolverSettings;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::error::ApiError;

/// Raw resolver response: status and undecoded body.
///
/// The body stays as bytes so that non-success responses can be passed
/// back to the client byte-for-byte.
#[derive(Debug, Clone)]
pub struct ResolverReply {
    /// HTTP status the resolver answered with
    pub status: StatusCode,
    /// Raw response body
    pub body: Bytes,
}

impl ResolverReply {
    /// Whether the resolver reported success
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// HTTP client for the resolver service
#[derive(Debug)]
pub struct ResolverClient {
    client: Client,
    base_url: String,
}

impl ResolverClient {
    /// Create a new resolver client with the given settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(settings: &ResolverSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ApiError::ResolverUnreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Forward a validated request to the resolver.
    ///
    /// Transport failures are the only error here; any HTTP response,
    /// whatever its status, is returned as a [`ResolverReply`].
    #[instrument(name = "call_temperature_service", skip(self), fields(cep = %request.cep))]
    pub async fn submit(&self, request: &ZipCodeRequest) -> Result<ResolverReply, ApiError> {
        let url = format!("{}/temperature", self.base_url);
        debug!(url = %url, "Forwarding to temperature resolver");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::ResolverUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::ResolverUnreachable(e.to_string()))?;

        Ok(ResolverReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_success_is_exactly_200() {
        let ok = ResolverReply {
            status: StatusCode::OK,
            body: Bytes::new(),
        };
        assert!(ok.is_success());

        let created = ResolverReply {
            status: StatusCode::CREATED,
            body: Bytes::new(),
        };
        assert!(!created.is_success());

        let not_found = ResolverReply {
            status: StatusCode::NOT_FOUND,
            body: Bytes::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn client_builds_from_settings() {
        let settings = ResolverSettings::default();
        assert!(ResolverClient::new(&settings).is_ok());
    }
}
