//! Application state for the georef API.

use std::sync::Arc;

use crate::engine::{GeorefEngine, PlaceNameEngine};

/// Shared application state. The engine is the only shared resource and is
/// immutable after startup, so handlers can run on any number of worker
/// threads without synchronization.
pub struct AppState {
    /// Georeferencing engine invoked for every valid request.
    pub engine: Arc<dyn GeorefEngine>,
}

impl AppState {
    /// Create state with the built-in engine.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(PlaceNameEngine::new()),
        }
    }

    /// Create state with an injected engine.
    pub fn with_engine(engine: Arc<dyn GeorefEngine>) -> Self {
        Self { engine }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
