//! Application state shared across handlers.

use std::sync::Arc;

use tickoff_core::Store;
use tokio::sync::RwLock;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The user store sits behind a
/// `RwLock`: every request that may mutate it holds the write guard for its
/// whole gate-lookup-and-mutate sequence, so concurrent requests never see a
/// half-applied change.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Create application state around an existing store.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Get a handle to the user store.
    #[must_use]
    pub const fn store(&self) -> &Arc<RwLock<Store>> {
        &self.store
    }
}
