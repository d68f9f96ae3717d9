//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Postal code is not exactly eight decimal digits
    #[error("Invalid zip code: {0}")]
    InvalidZipCode(String),
}
