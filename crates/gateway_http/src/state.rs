//! Application state shared across handlers

use std::sync::Arc;

use crate::client::ResolverClient;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the resolver hop
    pub resolver: Arc<ResolverClient>,
}
