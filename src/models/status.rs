use serde::Serialize;

use super::scan::ScanResponse;

pub const PENDING_TEXT: &str = "Analyzing...";
pub const OFFLINE_TEXT: &str = "Error: Backend Offline";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Neutral,
    Safe,
    Unsafe,
    Warning,
}

impl StatusColor {
    /// CSS color the popup paints the label with.
    pub fn as_css(&self) -> &'static str {
        match self {
            StatusColor::Neutral => "black",
            StatusColor::Safe => "#27ae60",
            StatusColor::Unsafe => "#c0392b",
            StatusColor::Warning => "orange",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            StatusColor::Neutral => (0, 0, 0),
            StatusColor::Safe => (0x27, 0xae, 0x60),
            StatusColor::Unsafe => (0xc0, 0x39, 0x2b),
            StatusColor::Warning => (0xff, 0xa5, 0x00),
        }
    }
}

/// Where a label sits in its `Idle -> Pending -> Rendered` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Pending,
    Safe,
    Unsafe,
    Error,
}

/// Text and color shown in a status label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub text: String,
    pub color: StatusColor,
}

impl Status {
    pub fn new(text: impl Into<String>, color: StatusColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn pending() -> Self {
        Self::new(PENDING_TEXT, StatusColor::Neutral)
    }

    pub fn offline() -> Self {
        Self::new(OFFLINE_TEXT, StatusColor::Warning)
    }

    pub fn from_response(response: &ScanResponse) -> Self {
        let color = if response.verdict().is_safe() {
            StatusColor::Safe
        } else {
            StatusColor::Unsafe
        };
        Self::new(response.summary(), color)
    }

    pub fn phase(&self) -> Phase {
        match self.color {
            StatusColor::Neutral => Phase::Pending,
            StatusColor::Safe => Phase::Safe,
            StatusColor::Unsafe => Phase::Unsafe,
            StatusColor::Warning => Phase::Error,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Pending
    }
}
