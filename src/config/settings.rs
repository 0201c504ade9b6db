//! Application settings
//!
//! Defaults match the service contract: 3 second polling cadence, 20 tolerated
//! DNS-pending polls (~60 s), and the 500 second cache-detection threshold.

use crate::error::ScanWatchError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Runtime settings, loadable from a TOML file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the assessment backend
    pub api_url: String,
    /// Seconds between polls once a scan is underway
    pub poll_interval_secs: u64,
    /// Consecutive DNS-pending polls tolerated before giving up
    pub max_dns_attempts: u32,
    /// Elapsed seconds above which a result is presumed served from cache
    pub cache_threshold_secs: i64,
    /// Per-request HTTP timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 3,
            max_dns_attempts: 20,
            cache_threshold_secs: 500,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load settings from the default config file, falling back to defaults
    /// when it does not exist. The path `config/default.toml` is resolved
    /// relative to the current working directory, so running the binary from
    /// another directory picks up that directory's file (or none).
    pub fn load_default() -> Result<Self, ScanWatchError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScanWatchError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| {
            ScanWatchError::Config(format!("config file not found: {}", path.display()))
        })?;

        let settings: Self =
            toml::from_str(&content).map_err(|e| ScanWatchError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the poll scheduler cannot work with. Must also be called
    /// after CLI overrides are applied; tokio panics on a zero interval.
    pub fn validate(&self) -> Result<(), ScanWatchError> {
        if self.poll_interval_secs == 0 {
            return Err(ScanWatchError::Config(
                "poll interval must be at least 1 second".to_string(),
            ));
        }
        if self.max_dns_attempts == 0 {
            return Err(ScanWatchError::Config(
                "max DNS attempts must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ScanWatchError::Config(
                "request timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}
