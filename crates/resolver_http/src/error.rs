//! API error handling
//!
//! Maps pipeline failures to the exact wire responses of the temperature
//! endpoint. The response bodies are part of the contract; upstream error
//! detail goes to the log, never to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ErrorBody;
use integration_viacep::AddressError;
use integration_weatherapi::WeatherError;
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body did not decode into a zip-code request.
    ///
    /// The same response is produced for malformed JSON and for a malformed
    /// code; callers cannot tell the two apart, and that ambiguity is part
    /// of the contract.
    #[error("invalid zipcode")]
    InvalidZipCode,

    /// The postal code resolved to no address
    #[error("can not find zipcode")]
    ZipCodeNotFound,

    /// Address provider could not be reached
    #[error("failed to get address")]
    AddressUnreachable(String),

    /// Address provider answered with an undecodable body
    #[error("failed to parse address")]
    AddressUnparseable(String),

    /// Weather provider could not be reached
    #[error("failed to get temperature")]
    WeatherUnreachable(String),

    /// Weather provider answered with an undecodable body
    #[error("failed to parse temperature")]
    WeatherUnparseable(String),
}

impl ApiError {
    /// Status code of the wire response
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidZipCode => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ZipCodeNotFound => StatusCode::NOT_FOUND,
            Self::AddressUnreachable(_)
            | Self::AddressUnparseable(_)
            | Self::WeatherUnreachable(_)
            | Self::WeatherUnparseable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidZipCode | Self::ZipCodeNotFound => None,
            Self::AddressUnreachable(detail)
            | Self::AddressUnparseable(detail)
            | Self::WeatherUnreachable(detail)
            | Self::WeatherUnparseable(detail) => Some(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(detail) = self.detail() {
            warn!(error = %self, detail = %detail, "Request failed");
        }

        let body = ErrorBody::new(self.to_string());
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Unreachable(detail) => Self::AddressUnreachable(detail),
            AddressError::Parse(detail) => Self::AddressUnparseable(detail),
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::Unreachable(detail) => Self::WeatherUnreachable(detail),
            WeatherError::Parse(detail) => Self::WeatherUnparseable(detail),
        }
    }
}
