//! Scan command: poll the backend until the scan reaches a terminal state
//!
//! The driver is one async task issuing sequential requests, so a superseded
//! poll can never race a fresh one; the session decides everything else.

use crate::client::LabsClient;
use crate::config::Settings;
use crate::error::Result;
use crate::output::Present;
use crate::report::{build_view, text};
use crate::session::{Directive, Phase, PollEvent, Session};
use std::path::Path;
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{debug, warn};

/// Run one full analysis for a domain. Returns the terminal phase so the
/// caller can pick an exit code; user-visible outcomes have already gone
/// through the presenter.
pub async fn run_scan(
    domain: &str,
    settings: &Settings,
    presenter: &mut dyn Present,
    save_report: Option<&Path>,
) -> Result<Phase> {
    // A zero interval would panic inside tokio's interval assertion
    settings.validate()?;

    let client = LabsClient::new(&settings.api_url, settings.request_timeout())?;
    let mut session = Session::new(domain, settings.max_dns_attempts);
    let mut ticker: Option<Interval> = None;

    presenter.scan_started(domain);

    loop {
        let event = match client.check(domain).await {
            Ok(Some(snapshot)) => PollEvent::Report(snapshot),
            Ok(None) => PollEvent::EmptyBody,
            Err(e) => PollEvent::TransportError(e.to_string()),
        };

        match session.apply(event) {
            Directive::Fail { advisory, kind } => {
                presenter.advisory(&advisory, kind);
                break;
            }
            Directive::Update {
                snapshot,
                done,
                schedule,
            } => {
                let view = build_view(&snapshot, settings, domain);

                if done {
                    let download_hint =
                        format!("{}/download?domain={}", client.base_url(), domain);
                    presenter.completed(&view, &snapshot, &download_hint);

                    if let Some(path) = save_report {
                        let report = text::generate_report(&snapshot);
                        std::fs::write(path, report)?;
                        debug!(path = %path.display(), "report saved");
                    }
                    break;
                }

                presenter.progress(&view);

                if schedule {
                    let mut t = interval(settings.poll_interval());
                    t.set_missed_tick_behavior(MissedTickBehavior::Delay);
                    // The first tick of a fresh interval fires immediately
                    t.tick().await;
                    ticker = Some(t);
                }
            }
            Directive::Ignore => {
                if session.phase().is_terminal() {
                    break;
                }
                if !session.timer_armed() {
                    // Empty body before any timer was armed; with nothing
                    // scheduled there is nothing to wait for.
                    warn!(domain, "backend returned no status and no poll is scheduled");
                    break;
                }
            }
        }

        match ticker.as_mut() {
            Some(t) => {
                t.tick().await;
            }
            None => break,
        }
    }

    Ok(session.phase())
}
