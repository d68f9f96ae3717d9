//! HTTP request handlers

pub mod zipcode;
