//! Scan status snapshot types
//!
//! One `Snapshot` is one JSON payload from `GET /check?domain=<d>`. Snapshots
//! are immutable once received; each poll supersedes the previous one
//! wholesale. The API omits most fields while a scan is still in flight, so
//! everything beyond `status` is default-tolerant.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Coarse scan status reported by the assessment service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "ERROR")]
    Error,
    /// Anything the service reports that we do not model (e.g. "WAITING")
    #[serde(untagged)]
    Other(String),
}

impl Default for ScanStatus {
    fn default() -> Self {
        ScanStatus::Other(String::new())
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanStatus::Dns => write!(f, "DNS"),
            ScanStatus::InProgress => write!(f, "IN_PROGRESS"),
            ScanStatus::Ready => write!(f, "READY"),
            ScanStatus::Error => write!(f, "ERROR"),
            ScanStatus::Other(s) if s.is_empty() => write!(f, "Processing..."),
            ScanStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Full status envelope for one domain at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub host: String,
    pub status: ScanStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Scan start, Unix epoch milliseconds
    pub start_time: i64,
    /// Scan completion, Unix epoch milliseconds (0 while in flight)
    pub test_time: i64,
    pub endpoints: Vec<Endpoint>,
    pub certs: Vec<Certificate>,
}

impl Snapshot {
    /// Build the id -> certificate lookup used to resolve endpoint chains
    pub fn cert_map(&self) -> HashMap<&str, &Certificate> {
        self.certs.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    /// Whether `statusMessage` carries the rate-limit marker. The service
    /// reports this with a non-terminal status, so it must be checked before
    /// the status itself.
    pub fn is_rate_limited(&self) -> bool {
        self.status_message
            .as_deref()
            .is_some_and(|m| m.contains("Rate limit"))
    }
}

/// One server/IP instance under the scanned domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    pub ip_address: String,
    pub server_name: String,
    /// Scan duration for this endpoint, milliseconds
    pub duration: i64,
    /// Scan progress, percent
    pub progress: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub details: EndpointDetails,
}

/// TLS configuration details for one endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointDetails {
    pub cert_chains: Vec<CertChain>,
    pub protocols: Vec<Protocol>,
    pub heartbleed: bool,
    pub vuln_beast: bool,
    /// Bitmask; any nonzero value is treated as forward secrecy present
    pub forward_secrecy: i64,
}

/// Ordered certificate id references for one chain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertChain {
    pub id: String,
    pub cert_ids: Vec<String>,
}

/// Supported protocol entry, e.g. name "TLS" version "1.3"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Protocol {
    pub name: String,
    pub version: String,
}

/// Certificate metadata, looked up by id from the snapshot's cert set
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub id: String,
    pub subject: String,
    pub issuer_label: String,
    pub sig_alg: String,
    pub key_alg: String,
    pub key_size: i32,
    /// Not valid before, Unix epoch milliseconds
    pub not_before: i64,
    /// Not valid after, Unix epoch milliseconds
    pub not_after: i64,
    pub common_names: Vec<String>,
    pub revocation_status: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_flight_snapshot() {
        // While scanning, the API sends little more than the status
        let json = r#"{"host":"example.com","status":"DNS"}"#;
        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.status, ScanStatus::Dns);
        assert!(snap.endpoints.is_empty());
        assert!(snap.status_message.is_none());
    }

    #[test]
    fn test_parse_unknown_status() {
        let json = r#"{"host":"example.com","status":"WAITING"}"#;
        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.status, ScanStatus::Other("WAITING".to_string()));
    }

    #[test]
    fn test_parse_full_snapshot() {
        let json = r#"{
            "host": "example.com",
            "status": "READY",
            "startTime": 1700000000000,
            "testTime": 1700000060000,
            "endpoints": [{
                "ipAddress": "93.184.216.34",
                "serverName": "example.com",
                "duration": 45000,
                "progress": 100,
                "grade": "A+",
                "details": {
                    "certChains": [{"id": "chain-1", "certIds": ["c1", "c2"]}],
                    "protocols": [{"name": "TLS", "version": "1.3"}],
                    "heartbleed": false,
                    "vulnBeast": false,
                    "forwardSecrecy": 4
                }
            }],
            "certs": [
                {"id": "c1", "subject": "CN=example.com", "keyAlg": "EC", "keySize": 256,
                 "sigAlg": "SHA256withECDSA", "notBefore": 1690000000000,
                 "notAfter": 1720000000000, "revocationStatus": 2},
                {"id": "c2", "subject": "CN=Intermediate CA", "keyAlg": "RSA", "keySize": 2048,
                 "sigAlg": "SHA256withRSA", "notBefore": 1600000000000,
                 "notAfter": 1800000000000, "revocationStatus": 0}
            ]
        }"#;
        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.status, ScanStatus::Ready);
        assert_eq!(snap.endpoints.len(), 1);
        assert_eq!(snap.endpoints[0].grade.as_deref(), Some("A+"));
        assert_eq!(snap.endpoints[0].details.forward_secrecy, 4);

        let map = snap.cert_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["c1"].key_alg, "EC");
    }

    #[test]
    fn test_rate_limit_marker() {
        let snap = Snapshot {
            status: ScanStatus::InProgress,
            status_message: Some("Rate limit exceeded, please wait".to_string()),
            ..Snapshot::default()
        };
        assert!(snap.is_rate_limited());

        let quiet = Snapshot::default();
        assert!(!quiet.is_rate_limited());
    }
}
