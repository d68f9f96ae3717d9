//! Brazilian postal code (CEP) value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated CEP: exactly eight ASCII decimal digits, no separator.
///
/// Validation happens once at the edge (the input gateway); services behind
/// it receive the raw string and trust it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode {
    value: String,
}

impl ZipCode {
    /// Create a new zip code, rejecting anything that is not exactly
    /// eight decimal digits.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let value = code.into();

        if Self::is_valid(&value) {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidZipCode(value))
        }
    }

    /// Check whether a string satisfies the eight-digit rule without
    /// constructing a value.
    pub fn is_valid(code: &str) -> bool {
        code.len() == 8 && code.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the zip code as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ZipCode {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
