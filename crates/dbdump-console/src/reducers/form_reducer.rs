//! Config Form Reducer
//!
//! Handles editing actions for the config form popup. Opening in edit mode
//! needs the configs collection, so the main view state is passed read-only.

use crate::actions::FormAction;
use crate::state::{ConfigFormState, MainViewState};

/// Reduce config-form state
pub fn reduce_form(
    mut form: ConfigFormState,
    action: &FormAction,
    main_view: &MainViewState,
) -> ConfigFormState {
    match action {
        FormAction::OpenBlank => {
            return ConfigFormState::open_blank();
        }

        FormAction::OpenEdit(id) => {
            let Some(config) = main_view.configs.iter().find(|c| c.id == *id) else {
                log::warn!("OpenEdit: configuration {} not found", id);
                return form;
            };
            return ConfigFormState::open_edit(config);
        }

        FormAction::Close => {
            return ConfigFormState::default();
        }

        FormAction::Input(c) => {
            form.focused_value_mut().push(*c);
            form.error = None;
        }

        FormAction::Backspace => {
            form.focused_value_mut().pop();
            form.error = None;
        }

        FormAction::NextField => {
            form.focused = form.focused.next();
        }

        FormAction::PrevField => {
            form.focused = form.focused.previous();
        }

        FormAction::ToggleKind => {
            form.operation = form.operation.map(|kind| match kind {
                dbdump_client::OperationKind::Dump => dbdump_client::OperationKind::Restore,
                dbdump_client::OperationKind::Restore => dbdump_client::OperationKind::Dump,
            });
        }

        // Validated and dispatched by the backend middleware
        FormAction::Submit => {}
    }

    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;

    #[test]
    fn test_input_targets_focused_field() {
        let mut form = ConfigFormState::open_blank();
        form.focused = FormField::Host;
        let view = MainViewState::default();

        let form = reduce_form(form, &FormAction::Input('d'), &view);
        let form = reduce_form(form, &FormAction::Input('b'), &view);
        assert_eq!(form.host, "db");
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_input_clears_stale_error() {
        let mut form = ConfigFormState::open_blank();
        form.error = Some("port 'x' is not a number".into());
        let view = MainViewState::default();

        let form = reduce_form(form, &FormAction::Input('5'), &view);
        assert!(form.error.is_none());
    }

    #[test]
    fn test_close_resets_everything() {
        let mut form = ConfigFormState::open_blank();
        form.name = "half-typed".into();
        let view = MainViewState::default();

        let form = reduce_form(form, &FormAction::Close, &view);
        assert!(!form.visible);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_open_edit_unknown_id_keeps_form() {
        let form = ConfigFormState::default();
        let view = MainViewState::default();

        let form = reduce_form(form, &FormAction::OpenEdit(42), &view);
        assert!(!form.visible);
    }

    #[test]
    fn test_toggle_kind() {
        use dbdump_client::OperationKind;
        let form = ConfigFormState::open_blank();
        let view = MainViewState::default();

        assert_eq!(form.operation, Some(OperationKind::Dump));
        let form = reduce_form(form, &FormAction::ToggleKind, &view);
        assert_eq!(form.operation, Some(OperationKind::Restore));
    }
}
