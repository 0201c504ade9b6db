//! Download command: fetch the backend-rendered report for a completed scan

use crate::client::LabsClient;
use crate::config::Settings;
use crate::error::Result;
use console::style;
use std::path::{Path, PathBuf};

/// Fetch the plain-text report and write it to `output` (or a derived
/// `report_<domain>.txt` when none is given)
pub async fn run_download(
    domain: &str,
    settings: &Settings,
    output: Option<&Path>,
) -> Result<()> {
    let client = LabsClient::new(&settings.api_url, settings.request_timeout())?;
    let content = client.download(domain).await?;

    let path = match output {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_report_name(domain)),
    };

    std::fs::write(&path, content)?;
    println!(
        "{} Report saved to {}",
        style("✓").green(),
        style(path.display()).bold()
    );
    Ok(())
}

/// `google.com` -> `report_google_com.txt`
fn default_report_name(domain: &str) -> String {
    format!("report_{}.txt", domain.replace('.', "_"))
}
