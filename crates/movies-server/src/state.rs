//! Application state with a shared record store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Every handler holds the lock for the whole of its store
//! work, so a lookup and the write that follows it cannot interleave with
//! another request.

use std::sync::Arc;

use movies_storage::{IdStrategy, InMemoryStore};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The record store (async Mutex, awaited without blocking the runtime).
    pub store: Arc<tokio::sync::Mutex<InMemoryStore>>,
}

impl AppState {
    /// Creates state around an existing store.
    pub fn new(store: InMemoryStore) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }

    /// Creates state holding the three seed records.
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::new(InMemoryStore::seeded_with(strategy))
    }

    /// Creates state with an empty store.
    pub fn empty(strategy: IdStrategy) -> Self {
        Self::new(InMemoryStore::with_strategy(strategy))
    }
}
