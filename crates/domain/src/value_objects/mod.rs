//! Value objects with validation

mod temperature;
mod zip_code;

pub use temperature::Celsius;
pub use zip_code::ZipCode;
