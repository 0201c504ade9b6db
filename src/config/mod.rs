//! Runtime configuration
//!
//! Settings control the polling cadence and API location; messages hold the
//! status banner catalogue.

mod messages;
mod settings;

pub use messages::{banner_for_status, BannerState};
pub use settings::Settings;
