//! Backend Operations Middleware
//!
//! Central middleware for all backend API interactions:
//! - Config loading (fetch_configs)
//! - Operation log loading (fetch_operations)
//! - Config mutations (create, update, delete)
//! - Dump/restore triggers
//!
//! Fetch failures surface as `LoadError` actions (global error banner).
//! Mutation failures surface as `SaveError`/`DeleteError`/`TriggerError`
//! actions so they land next to the thing the user was doing.

use crate::actions::{Action, ConfigAction, FormAction, GlobalAction, OperationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use dbdump_client::BackendClient;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all backend API operations
pub struct BackendMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    /// Backend API client
    client: Arc<dyn BackendClient>,
}

impl BackendMiddleware {
    pub fn new(client: Arc<dyn BackendClient>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;
        Ok(Self { runtime, client })
    }

    /// Handle loading configs - spawn the fetch and let the action pass
    /// through so the reducer can set the loading flag
    fn handle_config_load(&self, dispatcher: &Dispatcher) -> bool {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_configs().await {
                Ok(configs) => {
                    log::info!("Loaded {} configs", configs.len());
                    dispatcher.dispatch(Action::Config(ConfigAction::Loaded(configs)));
                }
                Err(e) => {
                    log::error!("Failed to load configs: {}", e);
                    dispatcher.dispatch(Action::Config(ConfigAction::LoadError(e.to_string())));
                }
            }
        });

        true // Let action pass through to reducer (to set loading state)
    }

    /// Handle loading operation logs, optionally filtered to one config
    fn handle_operation_load(&self, config_id: Option<i64>, dispatcher: &Dispatcher) -> bool {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            match client.fetch_operations(config_id).await {
                Ok(operations) => {
                    log::info!(
                        "Loaded {} operations (filter: {:?})",
                        operations.len(),
                        config_id
                    );
                    dispatcher.dispatch(Action::Operation(OperationAction::Loaded(operations)));
                }
                Err(e) => {
                    log::error!("Failed to load operations: {}", e);
                    dispatcher
                        .dispatch(Action::Operation(OperationAction::LoadError(e.to_string())));
                }
            }
        });

        true
    }
}

/// Follow a pending operation until it reaches a terminal status
///
/// The backend runs dumps and restores in the background and updates the
/// log as it progresses. Re-fetch the config's operations on an interval
/// and dispatch `Updated` for the tracked log. Fetch hiccups are logged
/// and retried; polling stops after `POLL_LIMIT` rounds regardless.
async fn poll_operation(
    client: Arc<dyn BackendClient>,
    dispatcher: Dispatcher,
    config_id: i64,
    operation_id: i64,
) {
    const POLL_LIMIT: u32 = 60;

    for _ in 0..POLL_LIMIT {
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;

        let operations = match client.fetch_operations(Some(config_id)).await {
            Ok(operations) => operations,
            Err(e) => {
                log::warn!("Poll for operation {} failed: {}", operation_id, e);
                continue;
            }
        };

        let Some(operation) = operations.into_iter().find(|op| op.id == operation_id) else {
            log::warn!("Operation {} disappeared from the backend", operation_id);
            return;
        };

        let done = operation.status.is_terminal();
        dispatcher.dispatch(Action::Operation(OperationAction::Updated(operation)));
        if done {
            return;
        }
    }

    log::warn!("Gave up polling operation {}", operation_id);
}

impl Middleware for BackendMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::Refresh) => {
                dispatcher.dispatch(Action::Config(ConfigAction::LoadStart));
                dispatcher.dispatch(Action::Operation(OperationAction::LoadStart {
                    config_id: state.main_view.selected_config,
                }));
                false // Consume action
            }

            Action::Config(ConfigAction::LoadStart) => self.handle_config_load(dispatcher),

            Action::Operation(OperationAction::LoadStart { config_id }) => {
                self.handle_operation_load(*config_id, dispatcher)
            }

            // Selecting a config narrows the operations panel to it
            Action::Config(ConfigAction::Select(config_id)) => {
                dispatcher.dispatch(Action::Operation(OperationAction::LoadStart {
                    config_id: *config_id,
                }));
                true // Reducer still records the selection
            }

            // Validate the form draft, then hand off to SaveRequest
            Action::Form(FormAction::Submit) => {
                match state.config_form.draft() {
                    Ok(payload) => {
                        dispatcher.dispatch(Action::Config(ConfigAction::SaveRequest {
                            id: state.config_form.editing,
                            payload,
                        }));
                    }
                    Err(msg) => {
                        log::warn!("Form validation failed: {}", msg);
                        dispatcher.dispatch(Action::Config(ConfigAction::SaveError(msg)));
                    }
                }
                false // Consume action
            }

            Action::Config(ConfigAction::SaveRequest { id, payload }) => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                let id = *id;
                let payload = payload.clone();

                self.runtime.spawn(async move {
                    let result = match id {
                        Some(id) => client.update_config(id, &payload).await,
                        None => client.create_config(&payload).await,
                    };

                    match result {
                        Ok(config) => {
                            log::info!("Saved config '{}' (id {})", config.name, config.id);
                            dispatcher.dispatch(Action::Config(ConfigAction::Saved(config)));
                        }
                        Err(e) => {
                            log::error!("Failed to save config: {}", e);
                            dispatcher
                                .dispatch(Action::Config(ConfigAction::SaveError(e.to_string())));
                        }
                    }
                });
                false // Consume action
            }

            Action::Config(ConfigAction::DeleteRequest(config_id)) => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                let config_id = *config_id;

                self.runtime.spawn(async move {
                    match client.delete_config(config_id).await {
                        Ok(()) => {
                            log::info!("Deleted config {}", config_id);
                            dispatcher.dispatch(Action::Config(ConfigAction::Deleted(config_id)));
                        }
                        Err(e) => {
                            log::error!("Failed to delete config {}: {}", config_id, e);
                            dispatcher.dispatch(Action::Config(ConfigAction::DeleteError(
                                config_id,
                                e.to_string(),
                            )));
                        }
                    }
                });
                false // Consume action
            }

            Action::Operation(OperationAction::DumpRequest(config_id)) => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                let config_id = *config_id;

                self.runtime.spawn(async move {
                    match client.trigger_dump(config_id).await {
                        Ok(operation) => {
                            log::info!(
                                "Dump started for config {} (operation {})",
                                config_id,
                                operation.id
                            );
                            let operation_id = operation.id;
                            dispatcher.dispatch(Action::Operation(OperationAction::Started(
                                operation,
                            )));
                            poll_operation(client, dispatcher, config_id, operation_id).await;
                        }
                        Err(e) => {
                            log::error!("Failed to trigger dump for config {}: {}", config_id, e);
                            dispatcher.dispatch(Action::Operation(OperationAction::TriggerError(
                                config_id,
                                e.to_string(),
                            )));
                        }
                    }
                });
                false // Consume action
            }

            Action::Operation(OperationAction::RestoreRequest {
                config_id,
                file_path,
            }) => {
                let client = Arc::clone(&self.client);
                let dispatcher = dispatcher.clone();
                let config_id = *config_id;
                let file_path = file_path.clone();

                self.runtime.spawn(async move {
                    match client.trigger_restore(config_id, &file_path).await {
                        Ok(operation) => {
                            log::info!(
                                "Restore started for config {} from {} (operation {})",
                                config_id,
                                file_path,
                                operation.id
                            );
                            let operation_id = operation.id;
                            dispatcher.dispatch(Action::Operation(OperationAction::Started(
                                operation,
                            )));
                            poll_operation(client, dispatcher, config_id, operation_id).await;
                        }
                        Err(e) => {
                            log::error!(
                                "Failed to trigger restore for config {}: {}",
                                config_id,
                                e
                            );
                            dispatcher.dispatch(Action::Operation(OperationAction::TriggerError(
                                config_id,
                                e.to_string(),
                            )));
                        }
                    }
                });
                false // Consume action
            }

            _ => true, // Pass through other actions
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigFormState;
    use async_trait::async_trait;
    use chrono::Utc;
    use dbdump_client::{
        ConfigPayload, ConnectionParams, DbConfig, OperationKind, OperationLog, OperationStatus,
    };
    use std::sync::mpsc;
    use std::time::Duration;

    /// Stub client: succeeds with canned data, or fails every call
    struct StubClient {
        fail: bool,
    }

    impl StubClient {
        fn ok() -> Self {
            Self { fail: false }
        }

        fn failing() -> Self {
            Self { fail: true }
        }

        fn check(&self) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("backend returned 500 Internal Server Error");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl BackendClient for StubClient {
        async fn fetch_configs(&self) -> anyhow::Result<Vec<DbConfig>> {
            self.check()?;
            Ok(vec![])
        }

        async fn fetch_operations(
            &self,
            _config_id: Option<i64>,
        ) -> anyhow::Result<Vec<OperationLog>> {
            self.check()?;
            Ok(vec![])
        }

        async fn create_config(&self, payload: &ConfigPayload) -> anyhow::Result<DbConfig> {
            self.check()?;
            Ok(DbConfig {
                id: 100,
                name: payload.name.clone(),
                db_type: payload.db_type.clone(),
                operation: payload.operation,
                params: payload.params.clone(),
                dump_path: payload.dump_path.clone(),
                restore_path: payload.restore_path.clone(),
                run_path: payload.run_path.clone(),
            })
        }

        async fn update_config(
            &self,
            id: i64,
            payload: &ConfigPayload,
        ) -> anyhow::Result<DbConfig> {
            self.check()?;
            let mut config = self.create_config(payload).await?;
            config.id = id;
            Ok(config)
        }

        async fn delete_config(&self, _id: i64) -> anyhow::Result<()> {
            self.check()
        }

        async fn trigger_dump(&self, config_id: i64) -> anyhow::Result<OperationLog> {
            self.check()?;
            Ok(OperationLog {
                id: 1,
                config_id,
                operation: OperationKind::Dump,
                status: OperationStatus::Loading,
                file_path: None,
                error_message: None,
                created_at: Utc::now(),
                finished_at: None,
            })
        }

        async fn trigger_restore(
            &self,
            config_id: i64,
            file_path: &str,
        ) -> anyhow::Result<OperationLog> {
            self.check()?;
            Ok(OperationLog {
                id: 2,
                config_id,
                operation: OperationKind::Restore,
                status: OperationStatus::Loading,
                file_path: Some(file_path.to_string()),
                error_message: None,
                created_at: Utc::now(),
                finished_at: None,
            })
        }
    }

    fn setup(client: StubClient) -> (BackendMiddleware, Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mw = BackendMiddleware::new(Arc::new(client)).unwrap();
        (mw, dispatcher, rx)
    }

    fn recv(rx: &mpsc::Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    fn payload() -> ConfigPayload {
        ConfigPayload {
            name: "staging".into(),
            db_type: "postgres".into(),
            operation: OperationKind::Dump,
            params: ConnectionParams {
                host: "localhost".into(),
                port: 5432,
                username: "admin".into(),
                password: None,
                database: "app".into(),
            },
            dump_path: None,
            restore_path: None,
            run_path: None,
        }
    }

    #[test]
    fn test_load_start_passes_through_and_dispatches_loaded() {
        let (mut mw, dispatcher, rx) = setup(StubClient::ok());

        let pass = mw.handle(
            &Action::Config(ConfigAction::LoadStart),
            &AppState::default(),
            &dispatcher,
        );
        assert!(pass);
        assert!(matches!(
            recv(&rx),
            Action::Config(ConfigAction::Loaded(_))
        ));
    }

    #[test]
    fn test_fetch_failure_dispatches_load_error() {
        let (mut mw, dispatcher, rx) = setup(StubClient::failing());

        mw.handle(
            &Action::Config(ConfigAction::LoadStart),
            &AppState::default(),
            &dispatcher,
        );
        match recv(&rx) {
            Action::Config(ConfigAction::LoadError(msg)) => {
                assert!(msg.contains("500"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_save_request_consumed_and_dispatches_saved() {
        let (mut mw, dispatcher, rx) = setup(StubClient::ok());

        let pass = mw.handle(
            &Action::Config(ConfigAction::SaveRequest {
                id: None,
                payload: payload(),
            }),
            &AppState::default(),
            &dispatcher,
        );
        assert!(!pass);
        match recv(&rx) {
            Action::Config(ConfigAction::Saved(config)) => {
                assert_eq!(config.id, 100);
                assert_eq!(config.name, "staging");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_save_failure_dispatches_save_error() {
        let (mut mw, dispatcher, rx) = setup(StubClient::failing());

        mw.handle(
            &Action::Config(ConfigAction::SaveRequest {
                id: Some(4),
                payload: payload(),
            }),
            &AppState::default(),
            &dispatcher,
        );
        assert!(matches!(
            recv(&rx),
            Action::Config(ConfigAction::SaveError(_))
        ));
    }

    #[test]
    fn test_submit_with_invalid_form_dispatches_save_error() {
        let (mut mw, dispatcher, rx) = setup(StubClient::ok());

        let mut state = AppState::default();
        state.config_form = ConfigFormState::open_blank(); // all fields empty

        let pass = mw.handle(&Action::Form(FormAction::Submit), &state, &dispatcher);
        assert!(!pass);
        match recv(&rx) {
            Action::Config(ConfigAction::SaveError(msg)) => {
                assert!(msg.contains("name"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_refresh_dispatches_both_loads() {
        let (mut mw, dispatcher, rx) = setup(StubClient::ok());

        let mut state = AppState::default();
        state.main_view.selected_config = Some(9);

        let pass = mw.handle(
            &Action::Global(GlobalAction::Refresh),
            &state,
            &dispatcher,
        );
        assert!(!pass);
        assert!(matches!(
            recv(&rx),
            Action::Config(ConfigAction::LoadStart)
        ));
        match recv(&rx) {
            Action::Operation(OperationAction::LoadStart { config_id }) => {
                assert_eq!(config_id, Some(9));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_trigger_failure_dispatches_trigger_error() {
        let (mut mw, dispatcher, rx) = setup(StubClient::failing());

        mw.handle(
            &Action::Operation(OperationAction::DumpRequest(3)),
            &AppState::default(),
            &dispatcher,
        );
        match recv(&rx) {
            Action::Operation(OperationAction::TriggerError(id, _)) => assert_eq!(id, 3),
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
