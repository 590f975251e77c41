//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let monitor = factory::monitor::create_monitor(&db).await?;
//!     let seen = factory::seen_clip::create_seen_clip(&db, &monitor.guild_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let monitor = factory::monitor::MonitorFactory::new(&db)
//!     .guild_id("987654321")
//!     .twitch_channel("shroud")
//!     .discord_channel_id("1111")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod monitor;
pub mod seen_clip;

// Re-export commonly used factory functions for concise usage
pub use monitor::create_monitor;
pub use seen_clip::create_seen_clip;
