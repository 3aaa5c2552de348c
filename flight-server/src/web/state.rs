//! Application state for the web layer.

use std::sync::Arc;

use crate::sky::SkyClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Sky-Scrapper API client
    pub sky: Arc<SkyClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(sky: SkyClient) -> Self {
        Self { sky: Arc::new(sky) }
    }
}
