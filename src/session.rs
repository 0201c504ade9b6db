//! Poll-state reconciliation
//!
//! One `Session` per user-initiated analysis. The session owns the attempt
//! counters and the timer-armed flag and turns each poll result into a single
//! `Directive` for the driver: render and keep going, render and finish, or
//! halt with an advisory. All rendering and I/O stay outside; the machine is
//! fully testable without a network or a terminal.
//!
//! State machine: `Idle -> Polling -> {Ready, Failed, DnsTimeout}`. Terminal
//! phases accept no further events; only constructing a fresh session for the
//! next analysis request leaves them.

use crate::classify::{classify_error, connection_error, dns_timeout};
use crate::models::{Advisory, ScanStatus, Snapshot};
use tracing::{debug, warn};

/// Lifecycle phase of a scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Polling,
    Ready,
    Failed,
    DnsTimeout,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Ready | Phase::Failed | Phase::DnsTimeout)
    }
}

/// What a single poll produced
#[derive(Debug)]
pub enum PollEvent {
    /// Fetch rejected or the backend answered non-2xx
    TransportError(String),
    /// 2xx with an empty body; a tolerated race with the backend
    EmptyBody,
    /// A parseable status snapshot
    Report(Snapshot),
}

/// Why a session ended in failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network-level failure reaching the backend
    Transport,
    /// The service itself reported a terminal error (or rate limiting)
    Api,
    /// DNS resolution stalled past the attempt ceiling
    DnsTimeout,
}

/// What the driver should do after reconciling one poll
#[derive(Debug)]
pub enum Directive {
    /// Nothing to do; any armed timer keeps running
    Ignore,
    /// Refresh the display from this snapshot. `schedule` is true exactly
    /// when a poll timer should be started (none was armed before).
    Update {
        snapshot: Snapshot,
        done: bool,
        schedule: bool,
    },
    /// Halt with an advisory; polling has already been stopped
    Fail {
        advisory: Advisory,
        kind: FailureKind,
    },
}

/// Mutable state for one analysis request
#[derive(Debug)]
pub struct Session {
    domain: String,
    phase: Phase,
    polls: u32,
    dns_attempts: u32,
    max_dns_attempts: u32,
    timer_armed: bool,
    last_report: Option<Snapshot>,
}

impl Session {
    /// Start a fresh session. Counters are zeroed and no timer is armed;
    /// creating a new session is the only way out of a terminal phase.
    pub fn new(domain: impl Into<String>, max_dns_attempts: u32) -> Self {
        Self {
            domain: domain.into(),
            phase: Phase::Idle,
            polls: 0,
            dns_attempts: 0,
            max_dns_attempts,
            timer_armed: false,
            last_report: None,
        }
    }

    /// Reconcile one poll result into a directive.
    ///
    /// Safe to call repeatedly; the timer-armed flag guarantees at most one
    /// scheduled timer per session, and terminal phases ignore every event.
    pub fn apply(&mut self, event: PollEvent) -> Directive {
        if self.phase.is_terminal() {
            debug!(domain = %self.domain, phase = ?self.phase, "event after terminal phase ignored");
            return Directive::Ignore;
        }

        match event {
            PollEvent::TransportError(detail) => {
                warn!(domain = %self.domain, %detail, "transport failure, halting");
                self.stop_polling();
                self.phase = Phase::Failed;
                Directive::Fail {
                    advisory: connection_error(),
                    kind: FailureKind::Transport,
                }
            }
            PollEvent::EmptyBody => Directive::Ignore,
            PollEvent::Report(snapshot) => self.reconcile(snapshot),
        }
    }

    fn reconcile(&mut self, snapshot: Snapshot) -> Directive {
        self.polls += 1;

        // Terminal service errors come first; a rate-limit message overrides
        // whatever status accompanies it.
        if snapshot.status == ScanStatus::Error || snapshot.is_rate_limited() {
            self.stop_polling();
            self.phase = Phase::Failed;
            let advisory = classify_error(snapshot.status_message.as_deref().unwrap_or(""));
            return Directive::Fail {
                advisory,
                kind: FailureKind::Api,
            };
        }

        if snapshot.status == ScanStatus::Dns {
            self.dns_attempts += 1;
            debug!(
                domain = %self.domain,
                attempt = self.dns_attempts,
                ceiling = self.max_dns_attempts,
                "DNS still resolving"
            );

            if self.dns_attempts >= self.max_dns_attempts {
                self.stop_polling();
                self.phase = Phase::DnsTimeout;
                return Directive::Fail {
                    advisory: dns_timeout(),
                    kind: FailureKind::DnsTimeout,
                };
            }
        } else {
            // The instant any non-DNS status shows up the counter starts over
            self.dns_attempts = 0;
        }

        if snapshot.status == ScanStatus::Ready {
            self.stop_polling();
            self.phase = Phase::Ready;
            self.last_report = Some(snapshot.clone());
            return Directive::Update {
                snapshot,
                done: true,
                schedule: false,
            };
        }

        self.phase = Phase::Polling;
        let schedule = self.arm_timer();
        Directive::Update {
            snapshot,
            done: false,
            schedule,
        }
    }

    /// Arm the poll timer unless one is already armed; returns whether the
    /// caller should actually start ticking
    fn arm_timer(&mut self) -> bool {
        if self.timer_armed {
            false
        } else {
            self.timer_armed = true;
            true
        }
    }

    /// Cancel the poll timer. Idempotent; a no-op when nothing is armed.
    pub fn stop_polling(&mut self) {
        self.timer_armed = false;
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn polls(&self) -> u32 {
        self.polls
    }

    pub fn dns_attempts(&self) -> u32 {
        self.dns_attempts
    }

    pub fn timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// The retained snapshot once a scan completed
    pub fn last_report(&self) -> Option<&Snapshot> {
        self.last_report.as_ref()
    }
}
