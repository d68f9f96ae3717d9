//! Zip-code submission handler
//!
//! Validates the postal-code format, forwards the request to the resolver
//! and relays the answer. Non-success resolver responses cross the gateway
//! byte-for-byte; a success body is re-decoded into a report and re-encoded
//! so the gateway never relays a malformed success payload.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use domain::{TemperatureReport, ZipCode, ZipCodeRequest};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Submit a zip code for temperature resolution
///
/// POST /
#[instrument(name = "handle_zipcode", skip_all)]
pub async fn submit_zip_code(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: ZipCodeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidZipCode)?;

    // Same response for a bad format as for undecodable JSON
    if !ZipCode::is_valid(&request.cep) {
        return Err(ApiError::InvalidZipCode);
    }

    let reply = state.resolver.submit(&request).await?;

    if !reply.is_success() {
        // Double-hop transparency: relay the resolver's error untouched
        info!(status = %reply.status, "Relaying resolver error response");
        return Ok((
            reply.status,
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response());
    }

    let report: TemperatureReport = serde_json::from_slice(&reply.body)
        .map_err(|e| ApiError::ResolverUnparseable(e.to_string()))?;

    info!(cep = %request.cep, city = %report.city, "Zip code resolved");

    Ok((StatusCode::OK, Json(report)).into_response())
}
