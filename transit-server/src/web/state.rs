//! Application state for the web layer.

use std::sync::Arc;

use crate::service::TransitService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The fetch-and-extract orchestrator.
    pub service: Arc<TransitService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: TransitService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
