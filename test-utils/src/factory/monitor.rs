//! Channel config factory for creating test monitor entities.
//!
//! Provides factory methods for creating channel config entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channel configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::monitor::MonitorFactory;
///
/// let monitor = MonitorFactory::new(&db)
///     .guild_id("987654321")
///     .twitch_channel("shroud")
///     .build()
///     .await?;
/// ```
pub struct MonitorFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    twitch_channel: String,
    discord_channel_id: String,
}

impl<'a> MonitorFactory<'a> {
    /// Creates a new MonitorFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - twitch_channel: `"channel_{id}"`
    /// - discord_channel_id: auto-incremented numeric string
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            twitch_channel: format!("channel_{}", id),
            discord_channel_id: (id + 1_000_000).to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the monitored Twitch channel name.
    pub fn twitch_channel(mut self, twitch_channel: impl Into<String>) -> Self {
        self.twitch_channel = twitch_channel.into();
        self
    }

    /// Sets the destination Discord channel ID.
    pub fn discord_channel_id(mut self, discord_channel_id: impl Into<String>) -> Self {
        self.discord_channel_id = discord_channel_id.into();
        self
    }

    /// Inserts the channel config into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created channel config entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel_config::Model, DbErr> {
        entity::channel_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            twitch_channel: ActiveValue::Set(self.twitch_channel),
            discord_channel_id: ActiveValue::Set(self.discord_channel_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a channel config with default values.
pub async fn create_monitor(db: &DatabaseConnection) -> Result<entity::channel_config::Model, DbErr> {
    MonitorFactory::new(db).build().await
}
