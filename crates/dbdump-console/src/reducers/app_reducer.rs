//! Root reducer
//!
//! Pure function that produces new state from current state + action.
//! Orchestrates the per-domain sub-reducers and handles global actions.

use crate::actions::{Action, ConfigAction, GlobalAction};
use crate::reducers::{config_reducer, form_reducer, operation_reducer};
use crate::state::{AppState, Pane};

/// Reduce the application state with one action
///
/// Unrecognized actions leave the state unchanged.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => match global {
            GlobalAction::Quit => {
                state.running = false;
                return state;
            }
            GlobalAction::NavNext => {
                nav(&mut state, 1);
            }
            GlobalAction::NavPrevious => {
                nav(&mut state, -1);
            }
            GlobalAction::FocusNextPane => {
                state.main_view.focus = state.main_view.focus.next();
            }
            // KeyPressed is consumed by the keyboard middleware; Refresh by
            // the backend middleware. Neither carries state of its own.
            GlobalAction::KeyPressed(_) | GlobalAction::Refresh => {}
        },

        Action::Config(config_action) => {
            // Save outcomes also drive the form: success closes it, failure
            // lands in its contextual error slot.
            match config_action {
                ConfigAction::Saved(_) => {
                    state.config_form = Default::default();
                }
                ConfigAction::SaveError(error) => {
                    state.config_form.error = Some(error.clone());
                }
                _ => {}
            }
            state.main_view = config_reducer::reduce_config(state.main_view, config_action);
        }

        Action::Operation(operation_action) => {
            state.main_view =
                operation_reducer::reduce_operation(state.main_view, operation_action);
        }

        Action::Form(form_action) => {
            state.config_form =
                form_reducer::reduce_form(state.config_form, form_action, &state.main_view);
        }
    }

    state
}

/// Move the cursor of the focused pane, clamped to collection bounds
fn nav(state: &mut AppState, delta: isize) {
    let view = &mut state.main_view;
    let (cursor, len) = match view.focus {
        Pane::Configs => (&mut view.cursor, view.configs.len()),
        Pane::Operations => (&mut view.operations_cursor, view.operations.len()),
    };
    if len == 0 {
        return;
    }
    let next = cursor.saturating_add_signed(delta);
    *cursor = next.min(len - 1);
}
