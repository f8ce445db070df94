//! HTTP clients the orchestrator uses to reach its two peer services

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::http::{send_with_retry, RetryPolicy};
use crate::models::{BulkUpsertResult, EntityKind};
use crate::sync::{BulkUpsertSink, EntitySource};

pub const DEFAULT_SPORTMONKS_SERVICE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_DATABASE_SERVICE_URL: &str = "http://127.0.0.1:8001";

fn normalize(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

/// Client for the provider wrapper service.
#[derive(Debug, Clone)]
pub struct SportmonksServiceClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl SportmonksServiceClient {
    pub fn new(http: Client, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url: normalize(base_url),
            retry,
        }
    }

    /// `GET /{entity}`
    pub async fn get_all(&self, kind: EntityKind) -> Result<Vec<Value>> {
        let url = format!("{}/{kind}", self.base_url);
        debug!(%url, "fetching collection from provider wrapper");
        let response = send_with_retry(self.http.get(&url), &self.retry).await?;
        Ok(response.json().await?)
    }

    /// `GET /{entity}/{id}`
    pub async fn get_one(&self, kind: EntityKind, id: i64) -> Result<Value> {
        let url = format!("{}/{kind}/{id}", self.base_url);
        let response = send_with_retry(self.http.get(&url), &self.retry).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl EntitySource for SportmonksServiceClient {
    async fn fetch_all(&self, kind: EntityKind) -> Result<Vec<Value>> {
        self.get_all(kind).await
    }
}

/// Client for the persistence service.
#[derive(Debug, Clone)]
pub struct DatabaseServiceClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl DatabaseServiceClient {
    pub fn new(http: Client, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url: normalize(base_url),
            retry,
        }
    }

    /// `POST /{entity}/bulk`, sent once.
    pub async fn bulk_upsert(
        &self,
        kind: EntityKind,
        records: &[Value],
    ) -> Result<BulkUpsertResult> {
        let url = format!("{}/{kind}/bulk", self.base_url);
        debug!(%url, count = records.len(), "forwarding collection to persistence service");
        let request = self.http.post(&url).json(records);
        let response = send_with_retry(request, &RetryPolicy::none()).await?;
        Ok(response.json().await?)
    }

    /// `GET /{entity}`
    pub async fn get_all(&self, kind: EntityKind) -> Result<Vec<Value>> {
        let url = format!("{}/{kind}", self.base_url);
        let response = send_with_retry(self.http.get(&url), &self.retry).await?;
        Ok(response.json().await?)
    }

    /// `GET /{entity}/{id}`
    pub async fn get_one(&self, kind: EntityKind, id: i64) -> Result<Value> {
        let url = format!("{}/{kind}/{id}", self.base_url);
        let response = send_with_retry(self.http.get(&url), &self.retry).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BulkUpsertSink for DatabaseServiceClient {
    async fn bulk_upsert(&self, kind: EntityKind, records: &[Value]) -> Result<BulkUpsertResult> {
        DatabaseServiceClient::bulk_upsert(self, kind, records).await
    }
}
