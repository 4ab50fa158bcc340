use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of a `scan_url` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlScanRequest {
    pub url: String,
}

/// Body of a `scan_email` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailScanRequest {
    pub text: String,
}

/// Opaque score returned next to the verdict.
///
/// The service sends either a JSON number (`0.97`) or a preformatted string
/// (`"97.3%"`, `"100% (Trusted)"`, `"N/A"`). Both are displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Number(n) => write!(f, "{}", n),
            Confidence::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Confidence {
    fn from(s: &str) -> Self {
        Confidence::Text(s.to_string())
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Confidence::Number)
            .unwrap_or_else(|| Confidence::Text(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub result: String,
    pub confidence: Confidence,
}

impl ScanResponse {
    pub fn new(result: impl Into<String>, confidence: impl Into<Confidence>) -> Self {
        Self {
            result: result.into(),
            confidence: confidence.into(),
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_label(&self.result)
    }

    /// `"<result> (Confidence: <confidence>)"`
    pub fn summary(&self) -> String {
        format!("{} (Confidence: {})", self.result, self.confidence)
    }
}

/// Label the service assigns to a scanned URL or email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Flagged(String),
}

pub const SAFE_LABEL: &str = "SAFE";

impl Verdict {
    /// Only the exact label `SAFE` counts as safe; anything else is flagged,
    /// including the service's own `Error` label.
    pub fn from_label(label: &str) -> Self {
        if label == SAFE_LABEL {
            Verdict::Safe
        } else {
            Verdict::Flagged(label.to_string())
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verdict::Safe => SAFE_LABEL,
            Verdict::Flagged(label) => label,
        }
    }
}
