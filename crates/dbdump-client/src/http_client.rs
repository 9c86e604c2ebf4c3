//! Reqwest-based backend client
//!
//! Direct implementation of the [`BackendClient`] trait against the
//! backend's REST API. Error bodies follow the backend's
//! `{ "detail": "..." }` shape; the detail string is extracted as the
//! error message, falling back to the HTTP status line.

use crate::client::BackendClient;
use crate::types::{ConfigPayload, DbConfig, OperationLog};
use anyhow::anyhow;
use async_trait::async_trait;
use log::debug;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Direct REST client using reqwest
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Create a client for the backend at `base_url`
    ///
    /// `timeout` applies per request; there are no retries.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn fetch_configs(&self) -> anyhow::Result<Vec<DbConfig>> {
        debug!("GET /configs");
        let response = self.http.get(self.url("/configs")).send().await?;
        expect_json(response).await
    }

    async fn fetch_operations(&self, config_id: Option<i64>) -> anyhow::Result<Vec<OperationLog>> {
        debug!("GET /operations (config_id: {:?})", config_id);
        let mut request = self.http.get(self.url("/operations"));
        if let Some(id) = config_id {
            request = request.query(&[("configId", id)]);
        }
        let response = request.send().await?;
        expect_json(response).await
    }

    async fn create_config(&self, payload: &ConfigPayload) -> anyhow::Result<DbConfig> {
        debug!("POST /configs ({})", payload.name);
        let response = self
            .http
            .post(self.url("/configs"))
            .json(payload)
            .send()
            .await?;
        expect_json(response).await
    }

    async fn update_config(&self, id: i64, payload: &ConfigPayload) -> anyhow::Result<DbConfig> {
        debug!("PUT /configs/{}", id);
        let response = self
            .http
            .put(self.url(&format!("/configs/{id}")))
            .json(payload)
            .send()
            .await?;
        expect_json(response).await
    }

    async fn delete_config(&self, id: i64) -> anyhow::Result<()> {
        debug!("DELETE /configs/{}", id);
        let response = self
            .http
            .delete(self.url(&format!("/configs/{id}")))
            .send()
            .await?;
        expect_ok(response).await
    }

    async fn trigger_dump(&self, config_id: i64) -> anyhow::Result<OperationLog> {
        debug!("POST /dump/{}", config_id);
        let response = self
            .http
            .post(self.url(&format!("/dump/{config_id}")))
            .send()
            .await?;
        expect_json(response).await
    }

    async fn trigger_restore(
        &self,
        config_id: i64,
        file_path: &str,
    ) -> anyhow::Result<OperationLog> {
        debug!("POST /restore/{} ({})", config_id, file_path);
        let response = self
            .http
            .post(self.url(&format!("/restore/{config_id}")))
            .json(&serde_json::json!({ "file_path": file_path }))
            .send()
            .await?;
        expect_json(response).await
    }
}

/// Deserialize a successful response body, or map the error body to a message
async fn expect_json<T: DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(anyhow!(detail_from_body(status, &body)))
    }
}

/// Check a response for success without expecting a body
async fn expect_ok(response: Response) -> anyhow::Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(anyhow!(detail_from_body(status, &body)))
    }
}

/// Extract the `detail` field from an error body, or fall back to the status
fn detail_from_body(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("backend returned {status}"))
}
