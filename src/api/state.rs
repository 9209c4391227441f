//! Application state for the dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::query::Dashboard;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the query interface over the snapshot loaded at startup. The
/// snapshot is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
}

impl AppState {
    /// Creates a new application state over a loaded snapshot.
    pub fn new(store: RecordStore) -> Self {
        Self {
            dashboard: Arc::new(Dashboard::new(store)),
        }
    }

    /// Returns the department query interface.
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }
}
