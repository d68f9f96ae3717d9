//! Input gateway service
//!
//! The public edge of the pipeline: validates the postal-code format and
//! forwards well-formed requests to the temperature resolver over HTTP.
//! Resolver responses, success or error, are passed back to the client
//! unchanged; the gateway only manufactures its own error when it cannot
//! reach the resolver at all or cannot decode a success body.

pub mod client;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use client::{ResolverClient, ResolverReply};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
