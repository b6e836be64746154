//! Realtime database client.
//!
//! This module provides:
//! - HTTP client for the database's REST surface
//! - Full-value writes, field patches, and key deletes at `users/{id}`
//! - One-shot snapshot reads of the whole collection
//!
//! Every operation returns an explicit [`StoreError`] on failure. The client
//! performs no retries; retry policy belongs to the caller.

#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::config::{StoreConfig, USERS_PATH};
use super::types::UserRecord;
use crate::error::StoreError;
use crate::traits::RecordStore;

/// Realtime database record store client.
#[derive(Debug, Clone)]
pub struct RtdbClient {
    client: Client,
    config: StoreConfig,
}

impl RtdbClient {
    /// Create a new client for the configured database.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Write a new record at `users/{id}`.
    ///
    /// The whole value is written; an existing entry under the same key would
    /// be overwritten, but ids are UUID-generated so collisions do not occur
    /// in practice.
    pub async fn create(&self, record: &UserRecord) -> Result<(), StoreError> {
        let url = self.key_url(&record.id);

        tracing::debug!(url = %url, id = %record.id, "Writing record");

        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Overwrite the name and age fields of the entry at `users/{id}`.
    ///
    /// Does not verify that the key previously existed; the database creates
    /// missing keys on patch.
    pub async fn update(&self, id: &str, name: &str, age: i64) -> Result<(), StoreError> {
        let url = self.key_url(id);

        tracing::debug!(url = %url, id = %id, "Patching record fields");

        let body = serde_json::json!({ "id": id, "name": name, "age": age });
        let response = self
            .client
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Delete the entry at `users/{id}`.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let url = self.key_url(id);

        tracing::debug!(url = %url, id = %id, "Deleting record");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Read the complete current snapshot of the collection.
    ///
    /// This is a one-shot read, not a subscription. Entries with missing or
    /// malformed fields are dropped from the result without error. The
    /// returned order is unspecified; callers sort as needed.
    pub async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let url = format!("{}/{USERS_PATH}.json", self.config.base_url);

        tracing::debug!(url = %url, "Fetching collection snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let response = Self::check_status(response).await?;

        // An empty collection comes back as JSON null
        let body: Option<HashMap<String, serde_json::Value>> =
            response
                .json()
                .await
                .map_err(|e| StoreError::UnexpectedResponse {
                    message: format!("Failed to parse snapshot: {e}"),
                })?;

        let mut records = Vec::new();
        if let Some(entries) = body {
            for (key, value) in entries {
                match serde_json::from_value::<UserRecord>(value) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        tracing::debug!(key = %key, error = %e, "Dropping malformed record");
                    }
                }
            }
        }

        tracing::debug!(count = records.len(), "Snapshot fetched");
        Ok(records)
    }

    /// URL of a single record key.
    fn key_url(&self, id: &str) -> String {
        format!("{}/{USERS_PATH}/{id}.json", self.config.base_url)
    }

    /// Map a transport-level error to a store error.
    fn map_send_error(&self, error: &reqwest::Error) -> StoreError {
        if error.is_timeout() {
            tracing::error!(timeout_ms = self.config.timeout_ms, "Store request timed out");
            StoreError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            tracing::error!(error = %error, "Store request failed");
            StoreError::Network {
                message: error.to_string(),
            }
        }
    }

    /// Map error status codes, passing successful responses through.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(StoreError::PermissionDenied);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::UnexpectedResponse {
                message: format!("Status {status}: {body}"),
            });
        }

        Ok(response)
    }
}

// ============================================================================
// RecordStore implementations
// ============================================================================

#[async_trait]
impl RecordStore for RtdbClient {
    async fn create(&self, record: &UserRecord) -> Result<(), StoreError> {
        Self::create(self, record).await
    }

    async fn update(&self, id: &str, name: &str, age: i64) -> Result<(), StoreError> {
        Self::update(self, id, name, age).await
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        Self::remove(self, id).await
    }

    async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        Self::fetch_all(self).await
    }
}

/// Blanket implementation for `Arc<RtdbClient>`.
#[async_trait]
impl RecordStore for Arc<RtdbClient> {
    async fn create(&self, record: &UserRecord) -> Result<(), StoreError> {
        <RtdbClient as RecordStore>::create(self.as_ref(), record).await
    }

    async fn update(&self, id: &str, name: &str, age: i64) -> Result<(), StoreError> {
        <RtdbClient as RecordStore>::update(self.as_ref(), id, name, age).await
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        <RtdbClient as RecordStore>::remove(self.as_ref(), id).await
    }

    async fn fetch_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        <RtdbClient as RecordStore>::fetch_all(self.as_ref()).await
    }
}
