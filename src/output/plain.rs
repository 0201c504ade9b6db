//! Plain-text presenter
//!
//! No spinners, no tables; prints the plain-text report on completion.
//! Suitable for logs and cron mails.

use super::Present;
use crate::models::{Advisory, Snapshot};
use crate::report::{text, ReportView};
use crate::session::FailureKind;

/// Presenter for `--format plain`
pub struct PlainPresenter {
    quiet: bool,
}

impl PlainPresenter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Present for PlainPresenter {
    fn scan_started(&mut self, domain: &str) {
        if !self.quiet {
            println!("Analyzing {}...", domain);
        }
    }

    fn progress(&mut self, view: &ReportView) {
        if !self.quiet {
            println!("{}", view.banner.message);
        }
    }

    fn advisory(&mut self, advisory: &Advisory, kind: FailureKind) {
        if kind == FailureKind::Api {
            println!("Status: FAILED");
        }
        println!("{}: {}", advisory.title, advisory.body);
    }

    fn completed(&mut self, _view: &ReportView, snapshot: &Snapshot, download_hint: &str) {
        print!("{}", text::generate_report(snapshot));
        if !self.quiet {
            println!("Full report: {}", download_hint);
        }
    }
}
