//! CLI argument definitions using clap

use crate::config::Settings;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ssl-scan-watch")]
#[command(author = "Russ McKendrick")]
#[command(version)]
#[command(about = "Poll a TLS assessment backend and render the scan report", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Domain to analyze (shortcut for 'scan' command)
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Base URL of the assessment backend
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Seconds between polls
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// DNS-pending polls tolerated before giving up
    #[arg(long, value_name = "N")]
    pub max_dns_attempts: Option<u32>,

    /// Elapsed seconds above which a result counts as cached
    #[arg(long, value_name = "SECS")]
    pub cache_threshold: Option<i64>,

    /// Per-request HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Save the plain-text report to a file once the scan completes
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a domain, polling until the scan finishes
    Scan(ScanArgs),

    /// Download the report for an already-completed scan
    Download(DownloadArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Domain to analyze
    #[arg(required = true)]
    pub domain: String,
}

#[derive(Args)]
pub struct DownloadArgs {
    /// Domain whose report to download
    #[arg(required = true)]
    pub domain: String,

    /// Write the report to this file instead of report_<domain>.txt
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rich terminal tables (default)
    Table,
    /// Final snapshot as JSON
    Json,
    /// Plain-text report
    Plain,
}

impl Cli {
    /// Merge CLI overrides into the loaded settings
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api_url = url.clone();
        }
        if let Some(interval) = self.interval {
            settings.poll_interval_secs = interval;
        }
        if let Some(max) = self.max_dns_attempts {
            settings.max_dns_attempts = max;
        }
        if let Some(threshold) = self.cache_threshold {
            settings.cache_threshold_secs = threshold;
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout_secs = timeout;
        }
    }
}
