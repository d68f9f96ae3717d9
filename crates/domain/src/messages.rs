//! Wire messages shared by the gateway and resolver services

use serde::{Deserialize, Serialize};

use crate::value_objects::Celsius;

/// Request body accepted by both services: `{"cep":"01310100"}`.
///
/// The `cep` field is a raw string here; the eight-digit format rule is
/// enforced by the input gateway before the request crosses the hop, and
/// the resolver trusts its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCodeRequest {
    /// Postal code as received from the client
    pub cep: String,
}

/// Canonical success response of both services.
///
/// Field names are part of the wire contract: `temp_C`, `temp_F`, `temp_K`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    /// Resolved city name
    pub city: String,
    /// Temperature in Celsius
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    /// Temperature in Fahrenheit
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    /// Temperature in Kelvin
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureReport {
    /// Build a report from a city name and a Celsius reading, deriving the
    /// other two scales.
    pub fn new(city: impl Into<String>, celsius: Celsius) -> Self {
        Self {
            city: city.into(),
            temp_c: celsius.value(),
            temp_f: celsius.to_fahrenheit(),
            temp_k: celsius.to_kelvin(),
        }
    }
}

/// Canonical error response shape: `{"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ErrorBody {
    /// Build an error body from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
