//! ssl-scan-watch Library
//!
//! A command-line client for an SSL Labs-style TLS assessment backend:
//! - Polls the backend's `/check` endpoint until a scan finishes
//! - Reconciles status snapshots (DNS -> IN_PROGRESS -> READY | ERROR) into
//!   one coherent display state, including rate-limit and DNS-stall handling
//! - Renders per-endpoint grades, protocols, vulnerability flags, and
//!   certificate chains as terminal tables, JSON, or plain text
//!
//! No scanning or cryptography happens locally; all analysis is done by the
//! remote service.

pub mod classify;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod output;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use error::{Result, ScanWatchError};
pub use models::{Advisory, ScanStatus, Severity, Snapshot};
pub use session::{Directive, FailureKind, Phase, PollEvent, Session};
