//! API error handling
//!
//! Only the failures the gateway itself produces live here. Resolver error
//! responses are not represented as errors at all; they are passed through
//! verbatim by the handler.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ErrorBody;
use thiserror::Error;
use tracing::warn;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body did not decode, or the code is not eight decimal digits.
    ///
    /// Both cases produce the identical response on purpose; callers cannot
    /// distinguish malformed JSON from a badly formatted code.
    #[error("invalid zipcode")]
    InvalidZipCode,

    /// The resolver could not be reached (transport failure)
    #[error("failed to call temperature service")]
    ResolverUnreachable(String),

    /// The resolver answered 200 with a body that is not a temperature report
    #[error("failed to parse temperature service response")]
    ResolverUnparseable(String),
}

impl ApiError {
    /// Status code of the wire response
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidZipCode => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ResolverUnreachable(_) | Self::ResolverUnparseable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidZipCode => None,
            Self::ResolverUnreachable(detail) | Self::ResolverUnparseable(detail) => Some(detail),
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
