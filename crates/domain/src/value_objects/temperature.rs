//! Temperature scale conversions

use serde::{Deserialize, Serialize};

/// A temperature in degrees Celsius.
///
/// Conversions are pure and use the fixed formulas of the wire contract:
/// `F = C * 1.8 + 32` and `K = C + 273.0`. The Kelvin offset is 273.0, not
/// 273.15; downstream consumers depend on the exact value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(f64);

impl Celsius {
    /// Wrap a Celsius reading
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    /// The raw Celsius value
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees Fahrenheit
    pub fn to_fahrenheit(self) -> f64 {
        self.0 * 1.8 + 32.0
    }

    /// Convert to Kelvin (fixed 273.0 offset)
    pub fn to_kelvin(self) -> f64 {
        self.0 + 273.0
    }
}

impl From<f64> for Celsius {
    fn from(degrees: f64) -> Self {
        Self(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_converts() {
        let c = Celsius::new(0.0);
        assert!((c.to_fahrenheit() - 32.0).abs() < f64::EPSILON);
        assert!((c.to_kelvin() - 273.0).abs() < f64::EPSILON);
    }

    #[test]
    fn twenty_five_celsius_converts() {
        let c = Celsius::new(25.0);
        assert!((c.to_fahrenheit() - 77.0).abs() < f64::EPSILON);
        assert!((c.to_kelvin() - 298.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_reading_converts() {
        let c = Celsius::new(-40.0);
        assert!((c.to_fahrenheit() + 40.0).abs() < f64::EPSILON);
        assert!((c.to_kelvin() - 233.0).abs() < f64::EPSILON);
    }

    #[test]
    fn kelvin_offset_is_273_exactly() {
        // 273.0, not 273.15
        let c = Celsius::new(0.15);
        assert!((c.to_kelvin() - 273.15).abs() < 1e-12);
    }
}
