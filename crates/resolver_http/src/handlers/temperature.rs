//! Temperature resolution handler
//!
//! The single operation of this service: postal code in, three-scale
//! temperature report out. The two upstream calls are strictly sequential;
//! the weather lookup needs the city resolved by the address lookup.

use axum::{Json, body::Bytes, extract::State};
use domain::{Celsius, TemperatureReport, ZipCodeRequest};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Resolve a postal code to a temperature report
///
/// POST /temperature
///
/// Precondition: the input gateway has already validated the eight-digit
/// format; the `cep` is forwarded to the address provider as received.
#[instrument(name = "handle_temperature", skip_all)]
pub async fn resolve_temperature(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TemperatureReport>, ApiError> {
    let request: ZipCodeRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidZipCode)?;

    let address = state.zip_lookup.lookup(&request.cep).await?;
    if address.is_unresolved() {
        return Err(ApiError::ZipCodeNotFound);
    }

    let sample = state.weather.current(&address.city).await?;

    info!(
        cep = %request.cep,
        city = %address.city,
        temp_c = sample.temp_celsius,
        "Temperature resolved"
    );

    Ok(Json(TemperatureReport::new(
        address.city,
        Celsius::new(sample.temp_celsius),
    )))
}
