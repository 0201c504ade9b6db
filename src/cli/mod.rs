//! Command-line interface

mod args;

pub use args::{Cli, Commands, DownloadArgs, OutputFormat, ScanArgs};

use crate::error::{Result, ScanWatchError};

/// Normalize user-entered domain input: trim, strip scheme and path, lowercase.
/// Empty input is rejected before any request is issued.
pub fn normalize_domain(raw: &str) -> Result<String> {
    let mut domain = raw.trim();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = domain.strip_prefix(scheme) {
            domain = rest;
        }
    }
    if let Some((host, _path)) = domain.split_once('/') {
        domain = host;
    }
    let domain = domain.to_lowercase();

    if domain.is_empty() {
        return Err(ScanWatchError::InvalidDomain(
            "please enter a domain to analyze".to_string(),
        ));
    }
    Ok(domain)
}
