//! JSON presenter
//!
//! Prints the final snapshot as pretty JSON on stdout; in-flight progress and
//! advisories go to stderr so the output stays pipeable.

use super::Present;
use crate::models::{Advisory, Snapshot};
use crate::report::ReportView;
use crate::session::FailureKind;

/// Presenter for `--format json`
pub struct JsonPresenter {
    quiet: bool,
}

impl JsonPresenter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Present for JsonPresenter {
    fn scan_started(&mut self, domain: &str) {
        if !self.quiet {
            eprintln!("analyzing {}", domain);
        }
    }

    fn progress(&mut self, view: &ReportView) {
        if !self.quiet {
            eprintln!("{}", view.banner.message);
        }
    }

    fn advisory(&mut self, advisory: &Advisory, _kind: FailureKind) {
        match serde_json::to_string_pretty(advisory) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to encode advisory: {}", e),
        }
    }

    fn completed(&mut self, _view: &ReportView, snapshot: &Snapshot, _download_hint: &str) {
        match serde_json::to_string_pretty(snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to encode report: {}", e),
        }
    }
}
