use crate::models::Status;
use std::sync::{Mutex, MutexGuard};

pub const RES_URL: &str = "res-url";
pub const RES_EMAIL: &str = "res-email";

/// An output element the controller writes its status into.
pub trait StatusLabel: Send + Sync {
    fn id(&self) -> &str;
    fn render(&self, status: &Status);
    fn current(&self) -> Option<Status>;
}

/// Label that keeps every render in memory.
#[derive(Debug)]
pub struct MemoryLabel {
    id: String,
    history: Mutex<Vec<Status>>,
}

impl MemoryLabel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<Status> {
        self.lock().clone()
    }

    pub fn render_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Status>> {
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StatusLabel for MemoryLabel {
    fn id(&self) -> &str {
        &self.id
    }

    fn render(&self, status: &Status) {
        self.lock().push(status.clone());
    }

    fn current(&self) -> Option<Status> {
        self.lock().last().cloned()
    }
}
