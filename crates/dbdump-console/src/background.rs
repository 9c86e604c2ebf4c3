//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain (API calls, key translation)
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware
//! chain, so a completed fetch can trigger follow-up loads.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::store::SharedState;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from the main thread and from Dispatcher re-entry
/// - `action_tx`: used to create the Dispatcher handed to middleware
/// - `result_tx`: sends non-consumed actions to the main thread for the reducer
/// - `state`: shared state for middleware to read
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware + Send>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware + Send>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(_) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        // Shutdown: forward quit to the reducer and stop processing
        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        // Snapshot for middleware to read
        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        // Run action through middleware chain
        let mut should_forward = true;
        for mw in &mut middleware {
            if !mw.handle(&action, &current_state, &dispatcher) {
                should_forward = false;
                break;
            }
        }

        // If middleware didn't consume the action, forward to the reducer
        if should_forward && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}
