//! Shared server state.
//!
//! One [`AppState`] is built at startup and cloned into each handler via
//! Axum's `State` extractor. The store clone is a cheap handle onto the
//! same underlying maps; tests construct isolated states with their own
//! stores.

use std::path::PathBuf;

use crate::store::MemStore;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The authoritative record store.
    pub store: MemStore,

    /// Directory holding the downloadable project documents.
    pub docs_dir: PathBuf,
}

impl AppState {
    pub fn new(store: MemStore, docs_dir: PathBuf) -> Self {
        Self { store, docs_dir }
    }
}
