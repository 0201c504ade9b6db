//! Command implementations

mod download;
mod scan;

pub use download::run_download;
pub use scan::run_scan;
