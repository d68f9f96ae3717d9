//! ViaCEP postal-code lookup integration
//!
//! Client for a ViaCEP-style address API (<https://viacep.com.br>): maps an
//! eight-digit Brazilian CEP to a structured address record.

pub mod client;
mod models;

pub use client::{AddressError, ViaCepClient, ViaCepConfig, ZipLookupClient};
pub use models::AddressRecord;
