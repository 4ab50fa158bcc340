use anyhow::Result;
use async_trait::async_trait;

/// The browser tab that was active and focused when the user clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub url: String,
}

impl Tab {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Host capability that answers "which tab is active in the current window".
#[async_trait]
pub trait TabSource: Send + Sync {
    async fn active_tab(&self) -> Result<Tab>;
}

/// Tab source that always reports the same tab.
#[derive(Debug, Clone)]
pub struct FixedTab {
    tab: Tab,
}

impl FixedTab {
    pub fn new(url: impl Into<String>) -> Self {
        Self { tab: Tab::new(url) }
    }
}

impl From<Tab> for FixedTab {
    fn from(tab: Tab) -> Self {
        Self { tab }
    }
}

#[async_trait]
impl TabSource for FixedTab {
    async fn active_tab(&self) -> Result<Tab> {
        Ok(self.tab.clone())
    }
}

/// Tab source for contexts with no browser window, such as email-only runs.
#[derive(Debug, Clone, Default)]
pub struct NoTab;

#[async_trait]
impl TabSource for NoTab {
    async fn active_tab(&self) -> Result<Tab> {
        anyhow::bail!("No active tab in the current window")
    }
}
