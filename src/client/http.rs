use super::{ScanClient, ScanEndpoint, ScanError};
use crate::models::{EmailScanRequest, ScanResponse, UrlScanRequest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BACKEND: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits on the transport for as long as it takes.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND.to_string(),
            timeout: None,
            user_agent: format!("phishscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

pub struct HttpScanClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpScanClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn build_endpoint_url(&self, endpoint: ScanEndpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: ScanEndpoint,
        body: &B,
    ) -> Result<ScanResponse, ScanError> {
        let url = self.build_endpoint_url(endpoint);
        tracing::debug!(%url, "sending scan request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ScanError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(ScanError::Unreachable)?;
        let parsed: ScanResponse = serde_json::from_slice(&bytes).map_err(ScanError::Schema)?;

        tracing::debug!(result = %parsed.result, confidence = %parsed.confidence, "scan complete");
        Ok(parsed)
    }
}

#[async_trait]
impl ScanClient for HttpScanClient {
    async fn scan_url(&self, url: &str) -> Result<ScanResponse, ScanError> {
        let body = UrlScanRequest {
            url: url.to_string(),
        };
        self.post(ScanEndpoint::ScanUrl, &body).await
    }

    async fn scan_email(&self, text: &str) -> Result<ScanResponse, ScanError> {
        let body = EmailScanRequest {
            text: text.to_string(),
        };
        self.post(ScanEndpoint::ScanEmail, &body).await
    }
}
