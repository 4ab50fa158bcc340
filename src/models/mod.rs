pub mod scan;
pub mod status;

pub use scan::{Confidence, EmailScanRequest, ScanResponse, UrlScanRequest, Verdict};
pub use status::{Phase, Status, StatusColor, OFFLINE_TEXT, PENDING_TEXT};
