//! Operation Log Reducer
//!
//! Handles state updates for the operation log collection. The log is
//! append-only on the client: `Started` prepends (newest first), `Updated`
//! replaces in place, nothing ever removes entries.

use crate::actions::OperationAction;
use crate::state::{MainViewState, StatusMessage};

/// Reduce operation-log state
pub fn reduce_operation(mut state: MainViewState, action: &OperationAction) -> MainViewState {
    match action {
        OperationAction::LoadStart { config_id } => {
            state.loading = true;
            state.error = None;
            log::debug!("Loading operations (filter: {:?})", config_id);
        }

        OperationAction::Loaded(operations) => {
            state.loading = false;
            state.operations = operations.clone();
            state.clamp_cursors();
            log::info!("Loaded {} operations", operations.len());
        }

        OperationAction::LoadError(error) => {
            state.loading = false;
            state.error = Some(error.clone());
            log::error!("Failed to load operations: {}", error);
        }

        OperationAction::Started(log_entry) => {
            // Newest first
            state.operations.insert(0, log_entry.clone());
            state.status = Some(StatusMessage::info(format!(
                "{} started for config {}",
                log_entry.operation.label(),
                log_entry.config_id
            )));
            log::info!(
                "Operation {} started for config {}",
                log_entry.id,
                log_entry.config_id
            );
        }

        OperationAction::Updated(log_entry) => {
            // Replace in place; no-op when the id is unknown
            if let Some(slot) = state.operations.iter_mut().find(|o| o.id == log_entry.id) {
                *slot = log_entry.clone();
                log::debug!(
                    "Operation {} now {}",
                    log_entry.id,
                    log_entry.status.label()
                );
            }
        }

        OperationAction::TriggerError(config_id, error) => {
            state.status = Some(StatusMessage::error(format!(
                "config {}: {}",
                config_id, error
            )));
            log::error!("Failed to trigger operation for {}: {}", config_id, error);
        }

        // Request actions - handled by the backend middleware
        OperationAction::DumpRequest(_) | OperationAction::RestoreRequest { .. } => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dbdump_client::{OperationKind, OperationLog, OperationStatus};

    fn op(id: i64, config_id: i64, status: OperationStatus) -> OperationLog {
        OperationLog {
            id,
            config_id,
            operation: OperationKind::Dump,
            status,
            file_path: None,
            error_message: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    #[test]
    fn test_started_prepends() {
        let mut state = MainViewState::default();
        state.operations = vec![op(1, 1, OperationStatus::Success), op(2, 1, OperationStatus::Error)];

        let state = reduce_operation(
            state,
            &OperationAction::Started(op(3, 1, OperationStatus::Loading)),
        );
        let ids: Vec<i64> = state.operations.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_updated_replaces_in_place() {
        let mut state = MainViewState::default();
        state.operations = vec![
            op(3, 1, OperationStatus::Loading),
            op(1, 1, OperationStatus::Success),
        ];

        let mut finished = op(3, 1, OperationStatus::Success);
        finished.file_path = Some("/dumps/app.sql".into());

        let state = reduce_operation(state, &OperationAction::Updated(finished));
        assert_eq!(state.operations[0].status, OperationStatus::Success);
        assert_eq!(state.operations[0].file_path.as_deref(), Some("/dumps/app.sql"));
        assert_eq!(state.operations.len(), 2);
    }

    #[test]
    fn test_updated_unknown_id_is_noop() {
        let mut state = MainViewState::default();
        state.operations = vec![op(1, 1, OperationStatus::Success)];
        let before = state.clone();

        let state = reduce_operation(
            state,
            &OperationAction::Updated(op(99, 1, OperationStatus::Error)),
        );
        assert_eq!(state.operations, before.operations);
        assert_eq!(state.loading, before.loading);
        assert_eq!(state.error, before.error);
        assert_eq!(state.selected_config, before.selected_config);
    }

    #[test]
    fn test_load_start_sets_loading() {
        let mut state = MainViewState::default();
        state.error = Some("stale".into());

        let state = reduce_operation(state, &OperationAction::LoadStart { config_id: Some(1) });
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_loaded_replaces_collection() {
        let mut state = MainViewState::default();
        state.operations = vec![op(1, 1, OperationStatus::Success)];
        state.loading = true;

        let state = reduce_operation(
            state,
            &OperationAction::Loaded(vec![
                op(5, 2, OperationStatus::Loading),
                op(4, 2, OperationStatus::Success),
            ]),
        );
        assert!(!state.loading);
        assert_eq!(state.operations.len(), 2);
        assert_eq!(state.operations[0].id, 5);
    }

    #[test]
    fn test_trigger_error_sets_status_not_global_error() {
        let state = MainViewState::default();
        let state = reduce_operation(
            state,
            &OperationAction::TriggerError(7, "no restore file configured".into()),
        );
        // Mutation failures stay contextual; the global error slot is for fetches
        assert!(state.error.is_none());
        let status = state.status.expect("status message set");
        assert!(status.message.contains("no restore file configured"));
    }
}
