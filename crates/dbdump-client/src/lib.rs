//! REST client for the dbdump backend service
//!
//! This crate provides a trait-based client for the backend that stores
//! database configurations and runs dump/restore operations. The trait
//! keeps the console testable: middleware talks to `BackendClient`, and
//! the reqwest-based implementation is swapped in at startup.
//!
//! # Example
//!
//! ```rust,no_run
//! use dbdump_client::{BackendClient, HttpBackendClient};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpBackendClient::new("http://localhost:8000", Duration::from_secs(30))?;
//! let configs = client.fetch_configs().await?;
//! println!("{} configurations", configs.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod types;

pub use client::BackendClient;
pub use http_client::HttpBackendClient;
pub use types::{
    ConfigPayload, ConnectionParams, DbConfig, OperationKind, OperationLog, OperationStatus,
};
