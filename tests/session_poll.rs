//! Poll-state reconciliation tests

use ssl_scan_watch::models::{ScanStatus, Snapshot};
use ssl_scan_watch::session::{Directive, FailureKind, Phase, PollEvent, Session};

const CEILING: u32 = 20;

fn snapshot(status: ScanStatus) -> Snapshot {
    Snapshot {
        host: "example.com".to_string(),
        status,
        ..Snapshot::default()
    }
}

fn report(status: ScanStatus) -> PollEvent {
    PollEvent::Report(snapshot(status))
}

#[test]
fn stop_polling_is_idempotent() {
    let mut session = Session::new("example.com", CEILING);
    assert!(!session.timer_armed());

    session.stop_polling();
    session.stop_polling();

    assert!(!session.timer_armed());
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.polls(), 0);
}

#[test]
fn single_flight_timer() {
    let mut session = Session::new("example.com", CEILING);

    // First non-terminal snapshot arms the timer
    match session.apply(report(ScanStatus::InProgress)) {
        Directive::Update { schedule, .. } => assert!(schedule),
        other => panic!("expected update, got {:?}", other),
    }
    assert!(session.timer_armed());

    // Subsequent ones must never ask for a second timer
    for _ in 0..5 {
        match session.apply(report(ScanStatus::InProgress)) {
            Directive::Update { schedule, .. } => assert!(!schedule),
            other => panic!("expected update, got {:?}", other),
        }
    }
}

#[test]
fn dns_ceiling_halts_on_twentieth_attempt() {
    let mut session = Session::new("example.com", CEILING);

    for i in 1..CEILING {
        match session.apply(report(ScanStatus::Dns)) {
            Directive::Update { done, .. } => assert!(!done, "attempt {} should continue", i),
            other => panic!("attempt {}: expected update, got {:?}", i, other),
        }
    }
    assert_eq!(session.dns_attempts(), 19);
    assert!(!session.phase().is_terminal());

    match session.apply(report(ScanStatus::Dns)) {
        Directive::Fail { kind, advisory } => {
            assert_eq!(kind, FailureKind::DnsTimeout);
            assert_eq!(advisory.title, "DNS Timeout");
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(session.phase(), Phase::DnsTimeout);
    assert!(!session.timer_armed());
}

#[test]
fn dns_counter_resets_on_non_dns_status() {
    let mut session = Session::new("example.com", 3);

    session.apply(report(ScanStatus::Dns));
    session.apply(report(ScanStatus::Dns));
    assert_eq!(session.dns_attempts(), 2);

    // One IN_PROGRESS in between wipes the streak
    session.apply(report(ScanStatus::InProgress));
    assert_eq!(session.dns_attempts(), 0);

    // Two further DNS snapshots must not reach the ceiling of 3
    session.apply(report(ScanStatus::Dns));
    match session.apply(report(ScanStatus::Dns)) {
        Directive::Update { .. } => {}
        other => panic!("expected update, got {:?}", other),
    }
    assert!(!session.phase().is_terminal());
}

#[test]
fn rate_limit_message_overrides_in_progress_status() {
    let mut session = Session::new("example.com", CEILING);

    let mut snap = snapshot(ScanStatus::InProgress);
    snap.status_message = Some("Rate limit exceeded, slow down".to_string());

    match session.apply(PollEvent::Report(snap)) {
        Directive::Fail { advisory, kind } => {
            assert_eq!(kind, FailureKind::Api);
            assert_eq!(advisory.title, "Slow down!");
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(session.phase(), Phase::Failed);
}

#[test]
fn unknown_error_message_falls_back_to_generic_advisory() {
    let mut session = Session::new("example.com", CEILING);

    let mut snap = snapshot(ScanStatus::Error);
    snap.status_message = Some("Server exploded".to_string());

    match session.apply(PollEvent::Report(snap)) {
        Directive::Fail { advisory, .. } => {
            assert_eq!(advisory.title, "Analysis Failed");
            assert_eq!(advisory.body, "Server exploded");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn ready_is_terminal_and_retains_report() {
    let mut session = Session::new("example.com", CEILING);

    session.apply(report(ScanStatus::InProgress));
    match session.apply(report(ScanStatus::Ready)) {
        Directive::Update { done, schedule, .. } => {
            assert!(done);
            assert!(!schedule);
        }
        other => panic!("expected update, got {:?}", other),
    }

    assert_eq!(session.phase(), Phase::Ready);
    assert!(!session.timer_armed());
    assert!(session.last_report().is_some());

    // Terminal finality: later events are ignored until a new session
    assert!(matches!(
        session.apply(report(ScanStatus::InProgress)),
        Directive::Ignore
    ));
    assert!(matches!(
        session.apply(PollEvent::TransportError("boom".to_string())),
        Directive::Ignore
    ));
    assert_eq!(session.phase(), Phase::Ready);
}

#[test]
fn transport_error_is_terminal_connection_advisory() {
    let mut session = Session::new("example.com", CEILING);
    session.apply(report(ScanStatus::InProgress));

    match session.apply(PollEvent::TransportError("connection refused".to_string())) {
        Directive::Fail { advisory, kind } => {
            assert_eq!(kind, FailureKind::Transport);
            assert_eq!(advisory.title, "Connection Error");
        }
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(session.phase(), Phase::Failed);
    assert!(!session.timer_armed());
}

#[test]
fn empty_body_is_a_non_event() {
    let mut session = Session::new("example.com", CEILING);
    session.apply(report(ScanStatus::InProgress));
    let polls = session.polls();

    assert!(matches!(session.apply(PollEvent::EmptyBody), Directive::Ignore));

    // Nothing moved: timer stays armed, counters untouched
    assert!(session.timer_armed());
    assert_eq!(session.polls(), polls);
    assert_eq!(session.phase(), Phase::Polling);
}

#[test]
fn new_session_starts_from_zero() {
    let mut first = Session::new("example.com", CEILING);
    first.apply(report(ScanStatus::Dns));
    first.apply(report(ScanStatus::Dns));

    let second = Session::new("example.com", CEILING);
    assert_eq!(second.dns_attempts(), 0);
    assert_eq!(second.polls(), 0);
    assert!(!second.timer_armed());
    assert_eq!(second.phase(), Phase::Idle);
}
