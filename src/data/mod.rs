//! Database repository layer for the two durable tables.
//!
//! This module contains repository structs that handle database operations for the
//! monitored channel configs and the per-guild seen clip set. Repositories use SeaORM
//! entity models internally and return domain models to maintain separation between
//! the data layer and business logic layer.

pub mod monitor;
pub mod seen_clip;
