pub mod http;

pub use http::{ClientConfig, HttpScanClient, DEFAULT_BACKEND};

use crate::models::ScanResponse;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEndpoint {
    ScanUrl,
    ScanEmail,
}

impl ScanEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ScanEndpoint::ScanUrl => "scan_url",
            ScanEndpoint::ScanEmail => "scan_email",
        }
    }
}

/// Why a scan produced no verdict. Every kind is shown to the user as the
/// same offline label; the kind only reaches the logs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("backend answered with HTTP {0}")]
    Status(u16),

    #[error("backend response does not match the scan schema: {0}")]
    Schema(#[source] serde_json::Error),

    #[error("no active tab: {0}")]
    NoActiveTab(String),
}

impl ScanError {
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::Unreachable(_) => "unreachable",
            ScanError::Status(_) => "status",
            ScanError::Schema(_) => "schema",
            ScanError::NoActiveTab(_) => "no_active_tab",
        }
    }
}

#[async_trait]
pub trait ScanClient: Send + Sync {
    async fn scan_url(&self, url: &str) -> Result<ScanResponse, ScanError>;
    async fn scan_email(&self, text: &str) -> Result<ScanResponse, ScanError>;
}
