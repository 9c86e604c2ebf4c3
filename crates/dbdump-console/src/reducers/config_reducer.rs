//! Config Reducer
//!
//! Handles state updates for the configuration collection.
//!
//! Invariant: `configs` holds at most one entry per id. `Saved` upserts by
//! id preserving position, `Deleted` removes by id and clears the selection
//! when it referenced the removed config.

use crate::actions::ConfigAction;
use crate::state::{MainViewState, StatusMessage};

/// Reduce configuration-collection state
pub fn reduce_config(mut state: MainViewState, action: &ConfigAction) -> MainViewState {
    match action {
        ConfigAction::LoadStart => {
            state.loading = true;
            state.error = None;
        }

        ConfigAction::Loaded(configs) => {
            state.loading = false;
            state.configs = configs.clone();
            state.clamp_cursors();
            log::info!("Loaded {} configurations", configs.len());
        }

        ConfigAction::LoadError(error) => {
            state.loading = false;
            state.error = Some(error.clone());
            log::error!("Failed to load configurations: {}", error);
        }

        ConfigAction::Select(id) => {
            state.selected_config = *id;
            log::debug!("Selected configuration: {:?}", id);
        }

        ConfigAction::Saved(config) => {
            // Upsert by id, preserving position on update
            if let Some(slot) = state.configs.iter_mut().find(|c| c.id == config.id) {
                *slot = config.clone();
            } else {
                state.configs.push(config.clone());
            }
            state.status = Some(StatusMessage::info(format!("saved '{}'", config.name)));
            log::info!("Saved configuration '{}' (id {})", config.name, config.id);
        }

        ConfigAction::Deleted(id) => {
            state.configs.retain(|c| c.id != *id);
            if state.selected_config == Some(*id) {
                state.selected_config = None;
            }
            state.clamp_cursors();
            log::info!("Deleted configuration {}", id);
        }

        ConfigAction::DeleteError(id, error) => {
            state.status = Some(StatusMessage::error(format!("delete {}: {}", id, error)));
            log::error!("Failed to delete configuration {}: {}", id, error);
        }

        // Request actions - handled by the backend middleware. SaveError is
        // routed to the config form by the root reducer.
        ConfigAction::SaveRequest { .. }
        | ConfigAction::SaveError(_)
        | ConfigAction::DeleteRequest(_) => {}
    }

    state
}
