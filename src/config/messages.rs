//! Status banner catalogue
//!
//! One-line advisory presentation per coarse scan status.

use crate::models::{ScanStatus, Severity};

/// What the status banner should show for the current snapshot
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BannerState {
    pub message: String,
    pub detail: Option<String>,
    pub severity: Severity,
    /// Whether the scan is still running (presenter keeps its spinner alive)
    pub in_progress: bool,
}

/// Map a scan status plus its optional service message to a banner state
pub fn banner_for_status(status: &ScanStatus, status_message: Option<&str>) -> BannerState {
    let (message, severity) = match status {
        ScanStatus::Dns => ("Resolving domain DNS...", Severity::Info),
        ScanStatus::InProgress => ("Scanning server configuration...", Severity::Info),
        ScanStatus::Ready => ("Analysis complete!", Severity::Info),
        ScanStatus::Error => ("An error occurred during the scan.", Severity::Danger),
        ScanStatus::Other(_) => ("Waiting for the scan to start...", Severity::Info),
    };

    BannerState {
        message: message.to_string(),
        detail: status_message.map(str::to_string),
        severity,
        in_progress: !matches!(status, ScanStatus::Ready | ScanStatus::Error),
    }
}
