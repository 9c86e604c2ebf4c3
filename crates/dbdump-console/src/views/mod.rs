use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub mod config_form;
pub mod main_view;
pub mod status_bar;

/// Render the entire application UI
///
/// Layout: configs table and operations panel side by side, a single-row
/// status bar at the bottom, and the config form as a popup overlay.
pub fn render(state: &AppState, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content area
            Constraint::Length(1), // Status bar (single row)
        ])
        .split(f.area());

    main_view::render(state, chunks[0], f);
    status_bar::render(state, chunks[1], f);

    if state.config_form.visible {
        config_form::render(state, f);
    }
}
