//! Domain layer for the CEP temperature services
//!
//! Contains the validated postal-code value object, temperature-unit
//! conversions and the wire messages both services exchange. This layer
//! performs no I/O.

pub mod errors;
pub mod messages;
pub mod value_objects;

pub use errors::DomainError;
pub use messages::{ErrorBody, TemperatureReport, ZipCodeRequest};
pub use value_objects::{Celsius, ZipCode};
