use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::http::{send_with_retry, RetryPolicy};

/// Base URL of the SportMonks v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.sportmonks.com/v3";

/// Query parameter carrying the provider access token.
pub const API_TOKEN_PARAM: &str = "api_token";

/// Authenticated client for the external provider.
#[derive(Debug, Clone)]
pub struct SportmonksClient {
    http: Client,
    base_url: String,
    api_token: String,
    retry: RetryPolicy,
}

impl SportmonksClient {
    pub fn new(
        http: Client,
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{endpoint}` with the access token plus `params`.
    ///
    /// Returns the raw JSON body; a non-2xx status is an error.
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value> {
        if let Some((name, _)) = params.iter().find(|(name, _)| *name == API_TOKEN_PARAM) {
            return Err(ServiceError::ReservedParam((*name).to_string()));
        }

        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        debug!(%url, "requesting provider resource");

        let mut query: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        query.push((API_TOKEN_PARAM, self.api_token.as_str()));
        query.extend_from_slice(params);

        let response = send_with_retry(self.http.get(&url).query(&query), &self.retry).await?;
        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests;
