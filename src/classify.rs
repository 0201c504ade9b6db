//! Error message classification
//!
//! The assessment service reports terminal failures as free-form strings in
//! `statusMessage`. Known messages get a curated advisory; anything else
//! falls back to a generic one carrying the raw message.

use crate::models::{Advisory, Severity};

/// Known service error messages and their curated advisories. Matching is by
/// prefix since the API sometimes appends detail after the canonical text.
const KNOWN_ERRORS: &[(&str, &str, &str, Severity)] = &[
    (
        "Rate limit exceeded",
        "Slow down!",
        "You've sent too many requests. The assessment service needs a break (wait 5-10 min).",
        Severity::Warning,
    ),
    (
        "Internal error",
        "API Error",
        "The assessment servers are having trouble. Try again in a moment.",
        Severity::Danger,
    ),
    (
        "Unable to resolve domain name",
        "DNS Error",
        "We couldn't find this domain. Check for typos (e.g., example.com).",
        Severity::Danger,
    ),
    (
        "Service not available",
        "Maintenance",
        "The engine is currently overloaded or under maintenance.",
        Severity::Warning,
    ),
];

/// Map a raw service error message to a structured advisory
pub fn classify_error(raw: &str) -> Advisory {
    for (needle, title, body, severity) in KNOWN_ERRORS {
        if raw.starts_with(needle) {
            return Advisory::new(*title, *body, *severity);
        }
    }

    let body = if raw.is_empty() {
        "An unexpected error occurred.".to_string()
    } else {
        raw.to_string()
    };
    Advisory::new("Analysis Failed", body, Severity::Danger)
}

/// Advisory for transport-level failures (fetch rejected or non-2xx)
pub fn connection_error() -> Advisory {
    Advisory::new(
        "Connection Error",
        "Unable to reach the server. Please try again.",
        Severity::Danger,
    )
}

/// Advisory for the client-side DNS resolution give-up
pub fn dns_timeout() -> Advisory {
    Advisory::new(
        "DNS Timeout",
        "The domain is taking too long to resolve. Please verify if it exists.",
        Severity::Warning,
    )
}
