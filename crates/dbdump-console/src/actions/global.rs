//! Global actions - not tied to any specific domain

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation by the keyboard middleware)
    KeyPressed(KeyEvent),
    /// Quit the application
    Quit,
    /// Refresh both collections from the backend
    Refresh,
    /// Move the cursor down in the focused pane
    NavNext,
    /// Move the cursor up in the focused pane
    NavPrevious,
    /// Switch focus between the configs table and the operations panel
    FocusNextPane,
}
