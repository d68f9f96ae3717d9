//! Route definitions

use axum::{Router, routing::post};

use crate::{handlers, state::AppState};

/// Create the resolver router.
///
/// Only `POST /temperature` is routed; axum's method-not-allowed fallback
/// answers every other method on the path with 405 and an empty body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/temperature", post(handlers::temperature::resolve_temperature))
        .with_state(state)
}
