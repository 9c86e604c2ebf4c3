//! Configuration collection actions

use dbdump_client::{ConfigPayload, DbConfig};

/// Actions for the configuration collection
#[derive(Debug, Clone)]
pub enum ConfigAction {
    // Fetching
    /// Start loading all configurations
    LoadStart,
    /// Configurations loaded successfully (replaces the collection)
    Loaded(Vec<DbConfig>),
    /// Failed to load configurations (error_message)
    LoadError(String),

    // Selection
    /// Select a configuration by id, or clear the selection with None
    Select(Option<i64>),

    // Save (create when id is None, update otherwise)
    /// Request to save a configuration draft
    SaveRequest {
        id: Option<i64>,
        payload: ConfigPayload,
    },
    /// Save succeeded - upsert the returned configuration by id
    Saved(DbConfig),
    /// Save failed (error_message) - surfaced in the config form
    SaveError(String),

    // Delete
    /// Request to delete a configuration by id
    DeleteRequest(i64),
    /// Delete succeeded - remove by id, clearing the selection if it matched
    Deleted(i64),
    /// Delete failed (config_id, error_message) - surfaced in the status line
    DeleteError(i64, String),
}
