//! WeatherAPI current-conditions integration
//!
//! Client for a WeatherAPI-style service (<https://www.weatherapi.com>):
//! fetches the current temperature for a named place. Only the Celsius
//! reading is consumed from the (much larger) response payload.

pub mod client;
mod models;

pub use client::{WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError};
pub use models::WeatherSample;
