//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod config_form;
mod main_view;

pub use app::AppState;
pub use config_form::{ConfigFormState, FormField};
pub use main_view::{MainViewState, Pane, StatusKind, StatusMessage};
