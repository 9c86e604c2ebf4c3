//! Application State

use super::{ConfigFormState, MainViewState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub main_view: MainViewState,
    /// Config form popup state (visible flag lives inside)
    pub config_form: ConfigFormState,
    /// Application configuration
    pub app_config: dbdump_config::AppConfig,
}

impl AppState {
    pub fn new(app_config: dbdump_config::AppConfig) -> Self {
        Self {
            running: true,
            main_view: MainViewState::default(),
            config_form: ConfigFormState::default(),
            app_config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(dbdump_config::AppConfig::default())
    }
}
