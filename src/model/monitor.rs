use chrono::{DateTime, Utc};

/// The key identifying one monitored (guild, twitch channel) pair.
///
/// Used by the scheduler's in-flight marker set; the twitch channel half is
/// always stored lowercased, so key equality matches the store's
/// case-insensitive identity.
pub type MonitorKey = (String, String);

/// A monitored Twitch channel and where its clips are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Discord guild that registered the monitor.
    pub guild_id: String,
    /// Twitch channel login name, lowercased.
    pub twitch_channel: String,
    /// Destination Discord channel for clip notifications.
    pub discord_channel_id: String,
    /// When the monitor was registered.
    pub created_at: DateTime<Utc>,
}

impl Monitor {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::channel_config::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            twitch_channel: entity.twitch_channel,
            discord_channel_id: entity.discord_channel_id,
            created_at: entity.created_at,
        }
    }

    /// The scheduler key for this monitor.
    pub fn key(&self) -> MonitorKey {
        (self.guild_id.clone(), self.twitch_channel.clone())
    }
}
