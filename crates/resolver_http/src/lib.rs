//! Temperature resolver service
//!
//! Accepts a postal code, resolves it to a city through the ViaCEP
//! integration, fetches the current temperature for that city and answers
//! with the reading in Celsius, Fahrenheit and Kelvin.
//!
//! The caller (the input gateway) validates the postal-code format before
//! forwarding; this service trusts its caller and only handles upstream
//! failures.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
