//! Backend API data transfer objects
//!
//! These types mirror the JSON bodies exchanged with the backend service.
//! They are intentionally separate from console state types so this crate
//! stays reusable outside the TUI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved database configuration as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Backend-assigned identifier
    pub id: i64,

    /// Unique human-readable name
    pub name: String,

    /// Database engine (e.g. "postgres", "mysql")
    pub db_type: String,

    /// Which operation this configuration is set up for
    pub operation: OperationKind,

    /// Connection parameters for the target database
    pub params: ConnectionParams,

    /// Target path for dump output
    #[serde(default)]
    pub dump_path: Option<String>,

    /// Source path for restore input
    #[serde(default)]
    pub restore_path: Option<String>,

    /// Working directory the backend runs the operation from
    #[serde(default)]
    pub run_path: Option<String>,
}

/// Request body for creating or updating a configuration
///
/// Same shape as [`DbConfig`] minus the backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPayload {
    pub name: String,
    pub db_type: String,
    pub operation: OperationKind,
    pub params: ConnectionParams,
    #[serde(default)]
    pub dump_path: Option<String>,
    #[serde(default)]
    pub restore_path: Option<String>,
    #[serde(default)]
    pub run_path: Option<String>,
}

impl From<DbConfig> for ConfigPayload {
    fn from(config: DbConfig) -> Self {
        Self {
            name: config.name,
            db_type: config.db_type,
            operation: config.operation,
            params: config.params,
            dump_path: config.dump_path,
            restore_path: config.restore_path,
            run_path: config.run_path,
        }
    }
}

/// Connection parameters for a target database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Optional; the backend falls back to its secret store when absent
    #[serde(default)]
    pub password: Option<String>,
    pub database: String,
}

/// Kind of operation a configuration drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Dump,
    Restore,
}

impl OperationKind {
    /// Display label for tables and the status line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dump => "dump",
            Self::Restore => "restore",
        }
    }
}

/// Status of a dump/restore operation
///
/// The backend historically reported `started`/`completed`/`failed`;
/// both spellings are accepted on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    /// Queued but not yet picked up by the backend
    #[default]
    Idle,
    /// Currently running
    #[serde(alias = "started")]
    Loading,
    /// Finished successfully
    #[serde(alias = "completed")]
    Success,
    /// Finished with an error
    #[serde(alias = "failed")]
    Error,
}

impl OperationStatus {
    /// Whether the operation has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    /// Display label for tables and the status line
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "running",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A record of one dump or restore attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationLog {
    /// Backend-assigned identifier
    pub id: i64,

    /// Configuration this operation ran against
    pub config_id: i64,

    /// Dump or restore
    pub operation: OperationKind,

    /// Current status
    pub status: OperationStatus,

    /// Dump file written or restored from
    #[serde(default)]
    pub file_path: Option<String>,

    /// Error detail when status is `Error`
    #[serde(default)]
    pub error_message: Option<String>,

    /// When the operation was triggered
    pub created_at: DateTime<Utc>,

    /// When the operation reached a terminal status
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}
