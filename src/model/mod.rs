//! Domain models used throughout the service and scheduler layers.
//!
//! Domain models are converted from entity models at the repository boundary and
//! from Twitch wire types at the HTTP client boundary, keeping database and API
//! concerns out of the business logic.

pub mod clip;
pub mod monitor;

pub use clip::Clip;
pub use monitor::{Monitor, MonitorKey};
