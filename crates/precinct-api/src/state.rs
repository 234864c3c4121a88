//! Shared application state for the REST API server.
//!
//! [`AppState`] owns the in-memory [`PollStore`] behind a read-write
//! lock. Read handlers take the read guard; every mutating handler takes
//! the write guard for the whole operation, so multi-entity flows like
//! check-in (voter flip plus station counter) are atomic with respect to
//! other requests.

use std::sync::Arc;

use precinct_store::PollStore;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// store is constructed once at process start and passed in; tests build
/// fresh instances with seeded randomness.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub store: Arc<RwLock<PollStore>>,
}

impl AppState {
    /// Wrap a store for sharing across request handlers.
    pub fn new(store: PollStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PollStore::new())
    }
}
