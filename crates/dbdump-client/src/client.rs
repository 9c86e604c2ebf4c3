//! Backend client trait
//!
//! Defines the interface the console uses to talk to the backend service.
//! The direct implementation lives in [`crate::http_client`]; tests can
//! substitute their own implementation.

use crate::types::{ConfigPayload, DbConfig, OperationLog};
use async_trait::async_trait;

/// Backend REST API client
///
/// Implementations must be `Send + Sync` so the client can be shared with
/// async tasks spawned by the console's backend middleware.
///
/// Mutating calls (`create_config`, `update_config`, `delete_config`,
/// `trigger_dump`, `trigger_restore`) return `Err` to the caller so the
/// failure can be tied to the originating interaction. Fetch calls also
/// return `Err`, but callers are expected to fold those into state rather
/// than surface them directly.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Fetch all saved configurations
    async fn fetch_configs(&self) -> anyhow::Result<Vec<DbConfig>>;

    /// Fetch operation logs, newest first
    ///
    /// When `config_id` is given, only operations for that configuration
    /// are returned.
    async fn fetch_operations(&self, config_id: Option<i64>) -> anyhow::Result<Vec<OperationLog>>;

    /// Create a new configuration
    ///
    /// Fails when the backend rejects the payload, e.g. a duplicate name.
    async fn create_config(&self, payload: &ConfigPayload) -> anyhow::Result<DbConfig>;

    /// Update an existing configuration by id
    async fn update_config(&self, id: i64, payload: &ConfigPayload) -> anyhow::Result<DbConfig>;

    /// Delete a configuration by id
    async fn delete_config(&self, id: i64) -> anyhow::Result<()>;

    /// Trigger a dump for a configuration
    ///
    /// Returns the pending operation log; the backend runs the dump in the
    /// background and updates the log as it progresses.
    async fn trigger_dump(&self, config_id: i64) -> anyhow::Result<OperationLog>;

    /// Trigger a restore for a configuration from the given dump file
    async fn trigger_restore(&self, config_id: i64, file_path: &str)
        -> anyhow::Result<OperationLog>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// The trait must stay object-safe: middleware holds it as
    /// `Arc<dyn BackendClient>` shared across spawned tasks.
    struct EmptyBackend;

    #[async_trait]
    impl BackendClient for EmptyBackend {
        async fn fetch_configs(&self) -> anyhow::Result<Vec<DbConfig>> {
            Ok(vec![])
        }

        async fn fetch_operations(
            &self,
            _config_id: Option<i64>,
        ) -> anyhow::Result<Vec<OperationLog>> {
            Ok(vec![])
        }

        async fn create_config(&self, _payload: &ConfigPayload) -> anyhow::Result<DbConfig> {
            anyhow::bail!("not supported")
        }

        async fn update_config(
            &self,
            _id: i64,
            _payload: &ConfigPayload,
        ) -> anyhow::Result<DbConfig> {
            anyhow::bail!("not supported")
        }

        async fn delete_config(&self, _id: i64) -> anyhow::Result<()> {
            Ok(())
        }

        async fn trigger_dump(&self, _config_id: i64) -> anyhow::Result<OperationLog> {
            anyhow::bail!("not supported")
        }

        async fn trigger_restore(
            &self,
            _config_id: i64,
            _file_path: &str,
        ) -> anyhow::Result<OperationLog> {
            anyhow::bail!("not supported")
        }
    }

    #[tokio::test]
    async fn test_trait_usable_as_shared_object() {
        let client: Arc<dyn BackendClient> = Arc::new(EmptyBackend);

        let handle = {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.fetch_configs().await })
        };

        let configs = handle.await.unwrap().unwrap();
        assert!(configs.is_empty());
    }
}
