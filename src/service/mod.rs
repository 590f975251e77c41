//! Business logic layer.
//!
//! `MonitorService` implements the admin command semantics over the repository
//! layer; `ClipPublisher` delivers formatted clip notifications to Discord.

pub mod monitor;
pub mod publisher;


pub use monitor::MonitorService;
pub use publisher::{ClipPublisher, ClipSink};
