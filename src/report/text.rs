//! Plain-text report generation
//!
//! Mirrors the report the backend serves on `/download`, so a completed scan
//! can be saved locally without a second round trip.

use crate::format::{format_date, revocation_label};
use crate::models::Snapshot;
use chrono::{TimeZone, Utc};
use std::fmt::Write;

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Render a completed snapshot as a plain-text report
pub fn generate_report(snapshot: &Snapshot) -> String {
    let cert_map = snapshot.cert_map();
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "         SSL REPORT: {}", snapshot.host.to_uppercase());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    let _ = writeln!(out, "DOMAIN:  {}", snapshot.host);
    let _ = writeln!(out, "STATUS:  {}", snapshot.status);
    if let Some(msg) = snapshot.status_message.as_deref() {
        if !msg.is_empty() {
            let _ = writeln!(out, "MESSAGE: {}", msg);
        }
    }

    let test_time = Utc
        .timestamp_millis_opt(snapshot.test_time)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(out, "DATE:    {}", test_time);
    let _ = writeln!(out, "{}", THIN_RULE);
    let _ = writeln!(out);

    for (i, ep) in snapshot.endpoints.iter().enumerate() {
        let _ = writeln!(out, "ENDPOINT #{}", i + 1);
        let _ = writeln!(out, "IP:          {}", ep.ip_address);
        let _ = writeln!(out, "Server Name: {}", ep.server_name);
        let _ = writeln!(
            out,
            "Grade:       {}",
            ep.grade.as_deref().unwrap_or("?")
        );
        let _ = writeln!(
            out,
            "Forward Secrecy: {}",
            if ep.details.forward_secrecy > 0 { "yes" } else { "no" }
        );
        let _ = writeln!(
            out,
            "Heartbleed:      {}",
            if ep.details.heartbleed { "VULNERABLE" } else { "not vulnerable" }
        );
        let _ = writeln!(
            out,
            "BEAST:           {}",
            if ep.details.vuln_beast { "VULNERABLE" } else { "not vulnerable" }
        );

        if !ep.details.protocols.is_empty() {
            let protocols: Vec<String> = ep
                .details
                .protocols
                .iter()
                .map(|p| format!("{} {}", p.name, p.version))
                .collect();
            let _ = writeln!(out, "Protocols:       {}", protocols.join(", "));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "CERTIFICATE CHAIN:");
        for chain in &ep.details.cert_chains {
            for cert_id in &chain.cert_ids {
                if let Some(cert) = cert_map.get(cert_id.as_str()) {
                    let _ = writeln!(out, "  - Subject: {}", cert.subject);
                    let _ = writeln!(
                        out,
                        "    Alg:        {} ({} {} bits)",
                        cert.sig_alg, cert.key_alg, cert.key_size
                    );
                    let _ = writeln!(
                        out,
                        "    Revocation: {}",
                        revocation_label(cert.revocation_status)
                    );
                    let _ = writeln!(out, "    Expires:    {}", format_date(cert.not_after));
                    let _ = writeln!(out, "    {}", "-".repeat(38));
                }
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", RULE);
    }

    out
}
