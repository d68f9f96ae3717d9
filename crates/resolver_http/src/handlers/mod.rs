//! HTTP request handlers

pub mod temperature;
