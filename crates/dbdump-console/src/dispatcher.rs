//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the
//! middleware chain (e.g. a fetch completing with `Loaded`, or a trigger
//! following up with a refresh), it uses the Dispatcher. Actions dispatched
//! here are sent back into the background worker's action channel.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
///
/// Actions dispatched here re-enter the middleware chain from the
/// beginning, allowing middleware to trigger other middleware handlers.
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher with the action channel
    ///
    /// `action_tx` must be a clone of the channel feeding the background
    /// worker, so dispatched actions re-enter the middleware chain.
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
