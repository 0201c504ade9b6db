//! Assessment backend HTTP client
//!
//! Thin wrapper over the two backend endpoints: `/check` for the polling
//! status envelope and `/download` for the rendered plain-text report.

use crate::error::{Result, ScanWatchError};
use crate::models::Snapshot;
use std::time::Duration;
use tracing::debug;

/// Client for the scan assessment backend
#[derive(Debug, Clone)]
pub struct LabsClient {
    http: reqwest::Client,
    base_url: String,
}

impl LabsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ssl-scan-watch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ScanWatchError::Http)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current status snapshot for a domain.
    ///
    /// Returns `Ok(None)` for a 2xx response with an empty body; the backend
    /// races its upstream poll and may have nothing to say yet, which is a
    /// tolerated non-event rather than an error.
    pub async fn check(&self, domain: &str) -> Result<Option<Snapshot>> {
        let url = format!("{}/check", self.base_url);
        debug!(domain, %url, "polling assessment backend");

        let response = self
            .http
            .get(&url)
            .query(&[("domain", domain)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScanWatchError::Api(format!(
                "check request failed with status: {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            debug!(domain, "empty status body, skipping this poll");
            return Ok(None);
        }

        let snapshot: Snapshot = serde_json::from_str(&text)
            .map_err(|e| ScanWatchError::Parse(format!("bad status envelope: {}", e)))?;
        Ok(Some(snapshot))
    }

    /// Fetch the backend-rendered plain-text report for a completed scan
    pub async fn download(&self, domain: &str) -> Result<String> {
        let url = format!("{}/download", self.base_url);
        debug!(domain, %url, "downloading report");

        let response = self
            .http
            .get(&url)
            .query(&[("domain", domain)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScanWatchError::Api(format!(
                "download request failed with status: {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
