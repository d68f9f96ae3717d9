//! Route definitions

use axum::{Router, routing::post};

use crate::{handlers, state::AppState};

/// Create the gateway router.
///
/// Only `POST /` is routed; axum's method-not-allowed fallback answers
/// every other method with 405 and an empty body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(handlers::zipcode::submit_zip_code))
        .with_state(state)
}
