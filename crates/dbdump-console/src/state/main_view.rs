//! Main View State
//!
//! The in-memory mirror of the two backend collections, plus cursor and
//! focus bookkeeping for the TUI.

use dbdump_client::{DbConfig, OperationLog};

/// Main view state
#[derive(Debug, Clone, Default)]
pub struct MainViewState {
    /// Saved configurations, unique by id, backend order preserved
    pub configs: Vec<DbConfig>,
    /// Operation logs, newest first, append-only on the client
    pub operations: Vec<OperationLog>,
    /// True while either collection is being fetched
    pub loading: bool,
    /// Last fetch failure, rendered passively in the status line
    pub error: Option<String>,
    /// Selected configuration id; filters the operations panel
    pub selected_config: Option<i64>,
    /// Cursor position in the configs table
    pub cursor: usize,
    /// Cursor position in the operations panel
    pub operations_cursor: usize,
    /// Which pane has keyboard focus
    pub focus: Pane,
    /// Transient message from the last mutation (save, delete, trigger)
    pub status: Option<StatusMessage>,
}

impl MainViewState {
    /// The configuration under the cursor, if any
    pub fn config_under_cursor(&self) -> Option<&DbConfig> {
        self.configs.get(self.cursor)
    }

    /// Keep cursors inside collection bounds after a collection shrinks
    pub fn clamp_cursors(&mut self) {
        if self.cursor >= self.configs.len() {
            self.cursor = self.configs.len().saturating_sub(1);
        }
        if self.operations_cursor >= self.operations.len() {
            self.operations_cursor = self.operations.len().saturating_sub(1);
        }
    }
}

/// Pane focus for keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Configs,
    Operations,
}

impl Pane {
    pub fn next(&self) -> Self {
        match self {
            Self::Configs => Self::Operations,
            Self::Operations => Self::Configs,
        }
    }
}

/// Transient status line message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}
