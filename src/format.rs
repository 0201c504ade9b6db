//! Pure display formatting
//!
//! Stateless projections from raw report fields to presentation values.
//! Nothing here touches the terminal; the presenter maps tiers to colors.

use chrono::{DateTime, TimeZone, Utc};

/// Display tier for grades and protocol versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Tier {
    /// Current best practice (A grades, TLS 1.3)
    Best,
    /// Acceptable (B grades, TLS 1.2)
    Good,
    /// Deprecated but not broken (TLS 1.0/1.1)
    Legacy,
    /// Actively insecure (any SSL version, failing grades)
    Critical,
    /// Missing or unrecognized
    Unknown,
}

/// Map a grade letter to its display tier. Grades starting with "A" are the
/// best tier, "B" the middle; everything else, including a missing grade, is
/// treated as failing.
pub fn grade_tier(grade: Option<&str>) -> Tier {
    match grade {
        Some(g) if g.starts_with('A') => Tier::Best,
        Some(g) if g.starts_with('B') => Tier::Good,
        Some(_) => Tier::Critical,
        None => Tier::Unknown,
    }
}

/// Map a protocol version string to its display tier
pub fn protocol_tier(version: &str) -> Tier {
    if version.contains("1.3") {
        Tier::Best
    } else if version.contains("1.2") {
        Tier::Good
    } else if version.contains("1.1") || version.contains("1.0") {
        Tier::Legacy
    } else if version.to_uppercase().contains("SSL") {
        Tier::Critical
    } else {
        Tier::Unknown
    }
}

/// Human label for a certificate revocation status code
pub fn revocation_label(status: i32) -> &'static str {
    match status {
        0 => "Not checked",
        1 => "REVOKED",
        2 => "Valid",
        3 => "Check unavailable",
        4 => "No revocation info",
        5 => "Internal error",
        _ => "Unknown",
    }
}

/// Elapsed scan time as a display string.
///
/// When the elapsed time exceeds `cache_threshold_secs` the result was almost
/// certainly served from the service's cache rather than freshly scanned, so
/// it is labeled as such instead of showing a misleading raw duration. The
/// threshold is a heuristic and configurable.
pub fn format_duration(start_ms: i64, end_ms: i64, cache_threshold_secs: i64) -> String {
    if end_ms <= start_ms {
        return "In progress...".to_string();
    }

    let elapsed_secs = (end_ms - start_ms + 500) / 1000;
    if elapsed_secs > cache_threshold_secs {
        return "Instant (served from cache)".to_string();
    }

    format!("{} seconds", elapsed_secs)
}

/// Epoch-milliseconds timestamp as a display string. A zero or negative
/// timestamp (scan not finished) substitutes the current time.
pub fn format_test_time(ms: i64) -> String {
    let when = if ms > 0 { ms } else { Utc::now().timestamp_millis() };
    epoch_millis(when)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Epoch-milliseconds as a date only (certificate validity bounds)
pub fn format_date(ms: i64) -> String {
    epoch_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_tiers() {
        assert_eq!(grade_tier(Some("A+")), Tier::Best);
        assert_eq!(grade_tier(Some("A-")), Tier::Best);
        assert_eq!(grade_tier(Some("B")), Tier::Good);
        assert_eq!(grade_tier(Some("C")), Tier::Critical);
        assert_eq!(grade_tier(Some("F")), Tier::Critical);
        assert_eq!(grade_tier(Some("T")), Tier::Critical);
        assert_eq!(grade_tier(None), Tier::Unknown);
    }

    #[test]
    fn test_protocol_tiers() {
        assert_eq!(protocol_tier("1.3"), Tier::Best);
        assert_eq!(protocol_tier("1.2"), Tier::Good);
        assert_eq!(protocol_tier("1.1"), Tier::Legacy);
        assert_eq!(protocol_tier("1.0"), Tier::Legacy);
        assert_eq!(protocol_tier("3.0 SSL"), Tier::Critical);
        assert_eq!(protocol_tier("ssl 2.0"), Tier::Critical);
        assert_eq!(protocol_tier("2.5"), Tier::Unknown);
    }

    #[test]
    fn test_revocation_labels() {
        assert_eq!(revocation_label(0), "Not checked");
        assert_eq!(revocation_label(1), "REVOKED");
        assert_eq!(revocation_label(2), "Valid");
        assert_eq!(revocation_label(5), "Internal error");
        assert_eq!(revocation_label(42), "Unknown");
        assert_eq!(revocation_label(-1), "Unknown");
    }

    #[test]
    fn test_duration_in_progress() {
        assert_eq!(format_duration(1000, 1000, 500), "In progress...");
        assert_eq!(format_duration(1000, 0, 500), "In progress...");
    }

    #[test]
    fn test_duration_normal() {
        assert_eq!(format_duration(0, 45_000, 500), "45 seconds");
    }

    #[test]
    fn test_duration_over_threshold_is_cache_label() {
        // 600 elapsed seconds reads as a cached result, not "600 seconds"
        assert_eq!(
            format_duration(0, 600_000, 500),
            "Instant (served from cache)"
        );
        // A raised threshold shows the raw duration again
        assert_eq!(format_duration(0, 600_000, 900), "600 seconds");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(1_700_000_000_000), "2023-11-14");
    }
}
