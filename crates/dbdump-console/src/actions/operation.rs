//! Operation log actions

use dbdump_client::OperationLog;

/// Actions for the operation log collection
#[derive(Debug, Clone)]
pub enum OperationAction {
    // Fetching
    /// Start loading operation logs, optionally filtered to one configuration
    LoadStart { config_id: Option<i64> },
    /// Operation logs loaded successfully (replaces the collection, newest first)
    Loaded(Vec<OperationLog>),
    /// Failed to load operation logs (error_message)
    LoadError(String),

    // Triggering
    /// Request to trigger a dump for a configuration
    DumpRequest(i64),
    /// Request to trigger a restore for a configuration from a dump file
    RestoreRequest { config_id: i64, file_path: String },
    /// The backend accepted the operation - prepend its pending log
    Started(OperationLog),
    /// An operation log changed - replace the matching entry in place
    Updated(OperationLog),
    /// Triggering failed (config_id, error_message) - surfaced in the status line
    TriggerError(i64, String),
}
