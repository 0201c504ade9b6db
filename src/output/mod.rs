//! Presentation adapters
//!
//! The poll driver talks to a `Present` implementation and nothing else, so
//! the reconciliation logic never touches the terminal directly and tests can
//! substitute a recording presenter.

pub mod json;
pub mod plain;
pub mod terminal;

use crate::models::{Advisory, Snapshot};
use crate::report::ReportView;
use crate::session::FailureKind;

pub use json::JsonPresenter;
pub use plain::PlainPresenter;
pub use terminal::TerminalPresenter;

/// Sink for everything the poll loop wants shown
pub trait Present {
    /// A new analysis request is starting
    fn scan_started(&mut self, domain: &str);

    /// A non-terminal snapshot arrived; refresh the in-flight display
    fn progress(&mut self, view: &ReportView);

    /// The session ended in failure
    fn advisory(&mut self, advisory: &Advisory, kind: FailureKind);

    /// The scan completed; render the full report and reveal the download
    fn completed(&mut self, view: &ReportView, snapshot: &Snapshot, download_hint: &str);
}
