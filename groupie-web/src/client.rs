//! Upstream API client
//!
//! One GET per call, no retries. Any status other than 200 is an error
//! carrying the observed status; a body that does not decode into the
//! expected shape is a separate decode error.

use groupie_common::{Artist, Date, Indexed, Location, Relation};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("groupie-web/", env!("CARGO_PKG_VERSION"));

/// API client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response status {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// HTTP/JSON client for the upstream artist API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// Artists resource: a bare JSON array
    pub async fn fetch_artists(&self, url: &str) -> Result<Vec<Artist>, ClientError> {
        self.fetch_json::<Vec<Artist>>(url).await
    }

    pub async fn fetch_locations(&self, url: &str) -> Result<Vec<Location>, ClientError> {
        self.fetch_indexed(url).await
    }

    pub async fn fetch_dates(&self, url: &str) -> Result<Vec<Date>, ClientError> {
        self.fetch_indexed(url).await
    }

    pub async fn fetch_relations(&self, url: &str) -> Result<Vec<Relation>, ClientError> {
        self.fetch_indexed(url).await
    }

    /// Resources wrapped as `{"index": [...]}`
    async fn fetch_indexed<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ClientError> {
        let indexed: Indexed<T> = self.fetch_json(url).await?;
        Ok(indexed.into_inner())
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "Querying upstream API");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
