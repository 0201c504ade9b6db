//! Presenter seam tests
//!
//! Drives a session the way the scan command does, but with a recording
//! presenter instead of a terminal, checking that exactly the right
//! presentation calls come out of a poll sequence.

use ssl_scan_watch::config::Settings;
use ssl_scan_watch::models::{Advisory, ScanStatus, Snapshot};
use ssl_scan_watch::output::Present;
use ssl_scan_watch::report::{build_view, ReportView};
use ssl_scan_watch::session::{Directive, FailureKind, PollEvent, Session};

#[derive(Debug, PartialEq)]
enum Call {
    Started(String),
    Progress(String),
    Advisory(String, FailureKind),
    Completed(String),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Present for Recorder {
    fn scan_started(&mut self, domain: &str) {
        self.calls.push(Call::Started(domain.to_string()));
    }

    fn progress(&mut self, view: &ReportView) {
        self.calls.push(Call::Progress(view.banner.message.clone()));
    }

    fn advisory(&mut self, advisory: &Advisory, kind: FailureKind) {
        self.calls.push(Call::Advisory(advisory.title.clone(), kind));
    }

    fn completed(&mut self, _view: &ReportView, _snapshot: &Snapshot, hint: &str) {
        self.calls.push(Call::Completed(hint.to_string()));
    }
}

fn snapshot(status: ScanStatus) -> Snapshot {
    Snapshot {
        host: "example.com".to_string(),
        status,
        ..Snapshot::default()
    }
}

/// Feed one event through the session into the presenter, like the driver
fn step(session: &mut Session, presenter: &mut Recorder, event: PollEvent, settings: &Settings) {
    match session.apply(event) {
        Directive::Ignore => {}
        Directive::Fail { advisory, kind } => presenter.advisory(&advisory, kind),
        Directive::Update { snapshot, done, .. } => {
            let view = build_view(&snapshot, settings, session.domain());
            if done {
                presenter.completed(&view, &snapshot, "http://localhost:8080/download?domain=example.com");
            } else {
                presenter.progress(&view);
            }
        }
    }
}

#[test]
fn successful_scan_ends_with_completion() {
    let settings = Settings::default();
    let mut session = Session::new("example.com", 20);
    let mut presenter = Recorder::default();

    presenter.scan_started("example.com");
    step(&mut session, &mut presenter, PollEvent::Report(snapshot(ScanStatus::Dns)), &settings);
    step(&mut session, &mut presenter, PollEvent::EmptyBody, &settings);
    step(
        &mut session,
        &mut presenter,
        PollEvent::Report(snapshot(ScanStatus::InProgress)),
        &settings,
    );
    step(&mut session, &mut presenter, PollEvent::Report(snapshot(ScanStatus::Ready)), &settings);

    assert_eq!(
        presenter.calls,
        vec![
            Call::Started("example.com".to_string()),
            Call::Progress("Resolving domain DNS...".to_string()),
            Call::Progress("Scanning server configuration...".to_string()),
            Call::Completed("http://localhost:8080/download?domain=example.com".to_string()),
        ]
    );
}

#[tokio::test]
async fn zero_poll_interval_is_a_config_error_not_a_panic() {
    let settings = Settings {
        poll_interval_secs: 0,
        ..Settings::default()
    };
    let mut presenter = Recorder::default();

    let err = ssl_scan_watch::commands::run_scan("example.com", &settings, &mut presenter, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ssl_scan_watch::ScanWatchError::Config(_)));
    // Rejected before anything was presented or fetched
    assert!(presenter.calls.is_empty());
}

#[test]
fn failed_scan_presents_one_advisory_and_nothing_after() {
    let settings = Settings::default();
    let mut session = Session::new("example.com", 20);
    let mut presenter = Recorder::default();

    step(
        &mut session,
        &mut presenter,
        PollEvent::Report(snapshot(ScanStatus::InProgress)),
        &settings,
    );

    let mut err = snapshot(ScanStatus::Error);
    err.status_message = Some("Internal error during scan".to_string());
    step(&mut session, &mut presenter, PollEvent::Report(err), &settings);

    // A straggler event after the terminal advisory must present nothing
    step(&mut session, &mut presenter, PollEvent::Report(snapshot(ScanStatus::Ready)), &settings);

    assert_eq!(
        presenter.calls,
        vec![
            Call::Progress("Scanning server configuration...".to_string()),
            Call::Advisory("API Error".to_string(), FailureKind::Api),
        ]
    );
}
