//! WeatherAPI wire payload and the sample extracted from it

use serde::Deserialize;

/// Raw WeatherAPI response. Only `current.temp_c` is read; everything else
/// in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WeatherApiPayload {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentConditions {
    pub temp_c: f64,
}

/// The single weather reading the pipeline consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    /// Current temperature in degrees Celsius
    pub temp_celsius: f64,
}

impl From<WeatherApiPayload> for WeatherSample {
    fn from(payload: WeatherApiPayload) -> Self {
        Self {
            temp_celsius: payload.current.temp_c,
        }
    }
}
