//! Data model types
//!
//! Mirrors the JSON status envelope returned by the assessment backend.

mod advisory;
mod snapshot;

pub use advisory::{Advisory, Severity};
pub use snapshot::{
    CertChain, Certificate, Endpoint, EndpointDetails, Protocol, ScanStatus, Snapshot,
};
