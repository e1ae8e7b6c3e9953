use std::sync::Arc;

use aether_store::MemoryStore;

/// Shared state for route handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
}
