use super::label::StatusLabel;
use crate::client::{ScanClient, ScanError};
use crate::models::{ScanResponse, Status};
use crate::tab::TabSource;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::{AbortHandle, JoinHandle};

/// Which response may paint a label when several clicks overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Every response renders, so the label ends on whichever resolved last.
    #[default]
    LastResponseWins,
    /// Only the most recent click renders; older in-flight scans are dropped.
    LatestRequestWins,
}

/// Map the outcome of a scan to what the label shows.
pub fn status_for(label_id: &str, result: Result<ScanResponse, ScanError>) -> Status {
    match result {
        Ok(response) => Status::from_response(&response),
        Err(e) => {
            tracing::warn!(label = label_id, kind = e.kind(), "scan failed: {}", e);
            Status::offline()
        }
    }
}

struct LabelSlot {
    label: Arc<dyn StatusLabel>,
    // Held while rendering so a stale response cannot slip in after a newer
    // click has already painted its pending state.
    generation: Mutex<u64>,
    inflight: Mutex<Option<(u64, AbortHandle)>>,
}

impl LabelSlot {
    fn new(label: Arc<dyn StatusLabel>) -> Self {
        Self {
            label,
            generation: Mutex::new(0),
            inflight: Mutex::new(None),
        }
    }

    fn generation(&self) -> MutexGuard<'_, u64> {
        self.generation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> u64 {
        let mut generation = self.generation();
        *generation += 1;
        self.label.render(&Status::pending());
        *generation
    }

    fn finish(&self, issued: u64, status: Status, policy: RenderPolicy) -> Option<Status> {
        let current = self.generation();
        if policy == RenderPolicy::LatestRequestWins && *current != issued {
            tracing::debug!(
                label = self.label.id(),
                issued,
                current = *current,
                "dropping superseded scan result"
            );
            return None;
        }
        self.label.render(&status);
        Some(status)
    }

    /// Remember the task running generation `issued`. Under
    /// `LatestRequestWins` whichever of the two tasks holds the older
    /// generation is aborted.
    fn track(&self, issued: u64, handle: AbortHandle, policy: RenderPolicy) {
        if policy != RenderPolicy::LatestRequestWins {
            return;
        }

        let mut inflight = self.inflight.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match inflight.take() {
            Some((newer, running)) if newer > issued => {
                tracing::debug!(label = self.label.id(), issued, "scan already superseded");
                handle.abort();
                *inflight = Some((newer, running));
            }
            Some((older, previous)) => {
                if !previous.is_finished() {
                    tracing::debug!(label = self.label.id(), older, "cancelling superseded scan");
                    previous.abort();
                }
                *inflight = Some((issued, handle));
            }
            None => *inflight = Some((issued, handle)),
        }
    }
}

/// Binds the two popup actions to a scan client and paints their labels.
pub struct PopupController {
    client: Arc<dyn ScanClient>,
    tabs: Arc<dyn TabSource>,
    url_slot: LabelSlot,
    email_slot: LabelSlot,
    policy: RenderPolicy,
}

impl PopupController {
    pub fn new(
        client: Arc<dyn ScanClient>,
        tabs: Arc<dyn TabSource>,
        url_label: Arc<dyn StatusLabel>,
        email_label: Arc<dyn StatusLabel>,
    ) -> Self {
        Self {
            client,
            tabs,
            url_slot: LabelSlot::new(url_label),
            email_slot: LabelSlot::new(email_label),
            policy: RenderPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    pub fn url_label(&self) -> &Arc<dyn StatusLabel> {
        &self.url_slot.label
    }

    pub fn email_label(&self) -> &Arc<dyn StatusLabel> {
        &self.email_slot.label
    }

    /// Scan the active tab's URL and render the verdict on the URL label.
    ///
    /// Returns the status rendered, or `None` when a newer click superseded
    /// this one before its response arrived.
    pub async fn scan_active_tab_url(&self) -> Option<Status> {
        let issued = self.url_slot.begin();
        self.run_url_scan(issued).await
    }

    /// Scan pasted email text. Blank input is ignored without touching the
    /// label or the network.
    pub async fn scan_email_text(&self, text: &str) -> Option<Status> {
        if text.trim().is_empty() {
            tracing::debug!("email text is blank, nothing to scan");
            return None;
        }

        let issued = self.email_slot.begin();
        self.run_email_scan(issued, text).await
    }

    /// Click handler for the URL button: the click's generation is taken
    /// before the scan task is spawned.
    pub fn spawn_scan_url(self: &Arc<Self>) -> JoinHandle<Option<Status>> {
        let issued = self.url_slot.begin();
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move { this.run_url_scan(issued).await });
        self.url_slot.track(issued, handle.abort_handle(), self.policy);
        handle
    }

    /// Click handler for the email button. Returns `None` for blank text,
    /// in which case nothing is spawned and any in-flight scan keeps running.
    pub fn spawn_scan_email(
        self: &Arc<Self>,
        text: impl Into<String>,
    ) -> Option<JoinHandle<Option<Status>>> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let issued = self.email_slot.begin();
        let this = Arc::clone(self);
        let handle = tokio::spawn(async move { this.run_email_scan(issued, &text).await });
        self.email_slot.track(issued, handle.abort_handle(), self.policy);
        Some(handle)
    }

    async fn run_url_scan(&self, issued: u64) -> Option<Status> {
        let result = match self.tabs.active_tab().await {
            Ok(tab) => {
                tracing::info!(url = %tab.url, "scanning active tab");
                self.client.scan_url(&tab.url).await
            }
            Err(e) => Err(ScanError::NoActiveTab(e.to_string())),
        };

        let status = status_for(self.url_slot.label.id(), result);
        self.url_slot.finish(issued, status, self.policy)
    }

    async fn run_email_scan(&self, issued: u64, text: &str) -> Option<Status> {
        tracing::info!(chars = text.chars().count(), "scanning email text");
        let result = self.client.scan_email(text).await;

        let status = status_for(self.email_slot.label.id(), result);
        self.email_slot.finish(issued, status, self.policy)
    }
}
