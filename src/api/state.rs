//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::registry::Registry;

/// Application state shared across all handlers.
///
/// Each state owns its registry; there is no ambient global store.
/// Clones share the same records.
#[derive(Clone)]
pub struct AppState {
    /// The user registry
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Create state with a fresh, empty registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
