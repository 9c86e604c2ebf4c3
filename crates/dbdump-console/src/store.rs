//! Store - owns application state and applies reduced actions
//!
//! The main thread applies actions coming back from the background worker;
//! the worker reads snapshots of the shared state for its middleware.

use crate::actions::Action;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::{Arc, RwLock};

/// Shared state handle (main thread writes via reducer, worker reads)
pub type SharedState = Arc<RwLock<AppState>>;

/// Store - holds application state behind a shared handle
pub struct Store {
    shared: SharedState,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            shared: Arc::new(RwLock::new(initial_state)),
        }
    }

    /// Get a handle for the background worker
    pub fn shared(&self) -> SharedState {
        Arc::clone(&self.shared)
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> AppState {
        match self.shared.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Run an action through the reducer and publish the new state
    pub fn apply(&self, action: &Action) {
        let mut guard = match self.shared.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = reduce(guard.clone(), action);
        *guard = next;
    }
}
