//! HTTP client for catalog fetches and channel calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Thin JSON-over-HTTP wrapper shared by catalog sources and channels
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request and return the raw body
    pub async fn get_bytes(&self, url: &str) -> ClientResult<Vec<u8>> {
        tracing::debug!(url, "GET");
        let response = Self::check_status(self.client.get(url).send().await?).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(url, "POST");
        let response = Self::check_status(self.client.post(url).json(body).send().await?).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Turn non-success statuses into errors, keeping the body for logs
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(response)
    }
}
