//! Report projection
//!
//! Builds a pure, presenter-agnostic view of a snapshot: one row group per
//! endpoint with a nested certificate sub-table. Presenters apply the view;
//! nothing here writes output.

pub mod text;

use crate::config::{banner_for_status, BannerState, Settings};
use crate::format::{
    format_date, format_duration, format_test_time, grade_tier, protocol_tier, revocation_label,
    Tier,
};
use crate::models::Snapshot;
use serde::Serialize;

/// Complete display projection of one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub banner: BannerState,
    pub host_line: String,
    pub status_line: String,
    pub test_date: String,
    pub test_duration: String,
    pub endpoints: Vec<EndpointRow>,
}

/// One endpoint row group
#[derive(Debug, Clone, Serialize)]
pub struct EndpointRow {
    pub ip_address: String,
    pub server_name: String,
    pub duration_ms: i64,
    pub progress: i8,
    pub grade: String,
    pub grade_tier: Tier,
    pub protocols: Vec<ProtocolBadge>,
    /// Inverted polarity: true is the green state (not vulnerable)
    pub heartbleed_ok: bool,
    pub beast_ok: bool,
    pub forward_secrecy: bool,
    pub certs: Vec<CertRow>,
}

/// One protocol version badge with its display tier
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolBadge {
    pub label: String,
    pub tier: Tier,
}

/// One certificate in an endpoint's chain
#[derive(Debug, Clone, Serialize)]
pub struct CertRow {
    /// Position 0 in the chain is the leaf certificate
    pub is_leaf: bool,
    pub subject: String,
    pub key_summary: String,
    pub revocation: String,
    pub valid_from: String,
    pub valid_until: String,
}

/// Project a snapshot into its display view. Early snapshots can omit the
/// host; `requested_domain` fills the host line until the service echoes it.
pub fn build_view(snapshot: &Snapshot, settings: &Settings, requested_domain: &str) -> ReportView {
    let cert_map = snapshot.cert_map();

    let endpoints = snapshot
        .endpoints
        .iter()
        .map(|ep| {
            // Only the first chain is rendered; ids missing from the cert set
            // are silently dropped.
            let cert_ids: &[String] = ep
                .details
                .cert_chains
                .first()
                .map(|c| c.cert_ids.as_slice())
                .unwrap_or(&[]);

            let certs = cert_ids
                .iter()
                .filter_map(|id| cert_map.get(id.as_str()))
                .enumerate()
                .map(|(i, cert)| CertRow {
                    is_leaf: i == 0,
                    subject: cert.subject.clone(),
                    key_summary: format!("{} {} / {}", cert.key_alg, cert.key_size, cert.sig_alg),
                    revocation: revocation_label(cert.revocation_status).to_string(),
                    valid_from: format_date(cert.not_before),
                    valid_until: format_date(cert.not_after),
                })
                .collect();

            let protocols = ep
                .details
                .protocols
                .iter()
                .map(|p| ProtocolBadge {
                    label: format!("{} {}", p.version, p.name),
                    tier: protocol_tier(&p.version),
                })
                .collect();

            EndpointRow {
                ip_address: ep.ip_address.clone(),
                server_name: ep.server_name.clone(),
                duration_ms: ep.duration,
                progress: ep.progress,
                grade: ep.grade.clone().unwrap_or_else(|| "?".to_string()),
                grade_tier: grade_tier(ep.grade.as_deref()),
                protocols,
                heartbleed_ok: !ep.details.heartbleed,
                beast_ok: !ep.details.vuln_beast,
                forward_secrecy: ep.details.forward_secrecy > 0,
                certs,
            }
        })
        .collect();

    let host = if snapshot.host.is_empty() {
        requested_domain
    } else {
        snapshot.host.as_str()
    };

    ReportView {
        banner: banner_for_status(&snapshot.status, snapshot.status_message.as_deref()),
        host_line: format!("Results for: {}", host),
        status_line: snapshot.status.to_string(),
        test_date: format_test_time(snapshot.test_time),
        test_duration: format_duration(
            snapshot.start_time,
            snapshot.test_time,
            settings.cache_threshold_secs,
        ),
        endpoints,
    }
}
