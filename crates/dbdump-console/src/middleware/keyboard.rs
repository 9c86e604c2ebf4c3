use crate::actions::{Action, ConfigAction, FormAction, GlobalAction, OperationAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware - converts raw keyboard events to semantic actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            if state.config_form.visible {
                handle_form_key(key, dispatcher);
            } else {
                handle_main_key(key, state, dispatcher);
            }
            // Consume the raw key event (don't pass to reducer)
            return false;
        }

        // Pass all other actions through
        true
    }
}

/// Key handling while the config form is open
fn handle_form_key(key: &KeyEvent, dispatcher: &Dispatcher) {
    match key.code {
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Form(FormAction::Close));
        }
        KeyCode::Enter => {
            dispatcher.dispatch(Action::Form(FormAction::Submit));
        }
        KeyCode::Tab | KeyCode::Down => {
            dispatcher.dispatch(Action::Form(FormAction::NextField));
        }
        KeyCode::BackTab | KeyCode::Up => {
            dispatcher.dispatch(Action::Form(FormAction::PrevField));
        }
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Form(FormAction::ToggleKind));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Backspace => {
            dispatcher.dispatch(Action::Form(FormAction::Backspace));
        }
        KeyCode::Char(c) if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT => {
            dispatcher.dispatch(Action::Form(FormAction::Input(c)));
        }
        _ => {
            log::trace!("Unhandled form key: {:?}", key);
        }
    }
}

/// Key handling on the main view
fn handle_main_key(key: &KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
    match key.code {
        // Quit
        KeyCode::Char('q') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
        }

        // Clear selection filter
        KeyCode::Esc => {
            dispatcher.dispatch(Action::Config(ConfigAction::Select(None)));
        }

        // Vim navigation
        KeyCode::Char('j') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::NavNext));
        }
        KeyCode::Down => {
            dispatcher.dispatch(Action::Global(GlobalAction::NavNext));
        }
        KeyCode::Char('k') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::NavPrevious));
        }
        KeyCode::Up => {
            dispatcher.dispatch(Action::Global(GlobalAction::NavPrevious));
        }

        // Switch pane focus
        KeyCode::Tab => {
            dispatcher.dispatch(Action::Global(GlobalAction::FocusNextPane));
        }

        // Reload configs and operations
        KeyCode::Char('r') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Global(GlobalAction::Refresh));
        }

        // New config
        KeyCode::Char('n') if key.modifiers == KeyModifiers::NONE => {
            dispatcher.dispatch(Action::Form(FormAction::OpenBlank));
        }

        // Edit config under cursor
        KeyCode::Char('e') if key.modifiers == KeyModifiers::NONE => {
            if let Some(config) = state.main_view.config_under_cursor() {
                dispatcher.dispatch(Action::Form(FormAction::OpenEdit(config.id)));
            }
        }

        // Trigger a dump for the config under cursor
        KeyCode::Char('d') if key.modifiers == KeyModifiers::NONE => {
            if let Some(config) = state.main_view.config_under_cursor() {
                dispatcher.dispatch(Action::Operation(OperationAction::DumpRequest(config.id)));
            }
        }

        // Trigger a restore for the config under cursor
        KeyCode::Char('t') if key.modifiers == KeyModifiers::NONE => {
            if let Some(config) = state.main_view.config_under_cursor() {
                let file_path = config
                    .restore_path
                    .clone()
                    .or_else(|| state.app_config.default_restore_file.clone());

                match file_path {
                    Some(file_path) => {
                        dispatcher.dispatch(Action::Operation(OperationAction::RestoreRequest {
                            config_id: config.id,
                            file_path,
                        }));
                    }
                    None => {
                        dispatcher.dispatch(Action::Operation(OperationAction::TriggerError(
                            config.id,
                            "no restore file configured".to_string(),
                        )));
                    }
                }
            }
        }

        // Delete config under cursor
        KeyCode::Char('x') if key.modifiers == KeyModifiers::NONE => {
            if let Some(config) = state.main_view.config_under_cursor() {
                dispatcher.dispatch(Action::Config(ConfigAction::DeleteRequest(config.id)));
            }
        }
        KeyCode::Delete => {
            if let Some(config) = state.main_view.config_under_cursor() {
                dispatcher.dispatch(Action::Config(ConfigAction::DeleteRequest(config.id)));
            }
        }

        // Toggle selection of the config under cursor
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(config) = state.main_view.config_under_cursor() {
                let next = if state.main_view.selected_config == Some(config.id) {
                    None
                } else {
                    Some(config.id)
                };
                dispatcher.dispatch(Action::Config(ConfigAction::Select(next)));
            }
        }

        // Unhandled keys
        _ => {
            log::trace!("Unhandled key: {:?}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use dbdump_client::{ConnectionParams, DbConfig, OperationKind};
    use std::sync::mpsc;

    fn config(id: i64, name: &str) -> DbConfig {
        DbConfig {
            id,
            name: name.to_string(),
            db_type: "postgres".to_string(),
            operation: OperationKind::Dump,
            params: ConnectionParams {
                host: "localhost".to_string(),
                port: 5432,
                username: "admin".to_string(),
                password: None,
                database: "appdb".to_string(),
            },
            dump_path: None,
            restore_path: None,
            run_path: None,
        }
    }

    fn press(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::from(code)))
    }

    #[test]
    fn test_q_translates_to_quit() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = KeyboardMiddleware::new();

        let consumed = !mw.handle(&press(KeyCode::Char('q')), &AppState::default(), &dispatcher);
        assert!(consumed);
        assert!(matches!(
            rx.recv().unwrap(),
            Action::Global(GlobalAction::Quit)
        ));
    }

    #[test]
    fn test_enter_toggles_selection() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = KeyboardMiddleware::new();

        let mut state = AppState::default();
        state.main_view.configs = vec![config(7, "prod")];

        mw.handle(&press(KeyCode::Enter), &state, &dispatcher);
        assert!(matches!(
            rx.recv().unwrap(),
            Action::Config(ConfigAction::Select(Some(7)))
        ));

        // Already selected: Enter clears the filter
        state.main_view.selected_config = Some(7);
        mw.handle(&press(KeyCode::Enter), &state, &dispatcher);
        assert!(matches!(
            rx.recv().unwrap(),
            Action::Config(ConfigAction::Select(None))
        ));
    }

    #[test]
    fn test_restore_without_file_reports_trigger_error() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = KeyboardMiddleware::new();

        let mut state = AppState::default();
        state.main_view.configs = vec![config(3, "prod")];
        state.app_config.default_restore_file = None;

        mw.handle(&press(KeyCode::Char('t')), &state, &dispatcher);
        match rx.recv().unwrap() {
            Action::Operation(OperationAction::TriggerError(id, msg)) => {
                assert_eq!(id, 3);
                assert!(msg.contains("no restore file"));
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_form_keys_route_to_form_actions() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut mw = KeyboardMiddleware::new();

        let mut state = AppState::default();
        state.config_form.visible = true;

        mw.handle(&press(KeyCode::Char('a')), &state, &dispatcher);
        assert!(matches!(
            rx.recv().unwrap(),
            Action::Form(FormAction::Input('a'))
        ));

        mw.handle(&press(KeyCode::Enter), &state, &dispatcher);
        assert!(matches!(rx.recv().unwrap(), Action::Form(FormAction::Submit)));

        mw.handle(&press(KeyCode::Esc), &state, &dispatcher);
        assert!(matches!(rx.recv().unwrap(), Action::Form(FormAction::Close)));
    }
}
