//! Application state shared across handlers

use std::sync::Arc;

use integration_viacep::ZipLookupClient;
use integration_weatherapi::WeatherClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Postal-code lookup client
    pub zip_lookup: Arc<dyn ZipLookupClient>,
    /// Current-weather client
    pub weather: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("zip_lookup", &"<ZipLookupClient>")
            .field("weather", &"<WeatherClient>")
            .finish()
    }
}
