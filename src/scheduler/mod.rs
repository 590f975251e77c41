//! Background scheduling.
//!
//! One cron job drives the clip poller; per-monitor work runs concurrently
//! within a tick under per-key in-flight exclusivity.

pub mod clip_poller;
