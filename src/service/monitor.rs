use sea_orm::DatabaseConnection;

use crate::{
    data::monitor::MonitorRepository,
    error::{monitor::MonitorError, AppError},
    model::Monitor,
};

/// Admin command semantics for managing monitored channels.
///
/// Validates and normalizes user input before it reaches the store and maps
/// store-level outcomes to user-visible `MonitorError`s. All failure paths
/// leave stored state unchanged.
pub struct MonitorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonitorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a Twitch channel for clip monitoring in a guild.
    ///
    /// The channel name is trimmed and lowercased before storage so that
    /// matching is case-insensitive.
    ///
    /// # Returns
    /// - `Ok(Monitor)` - The created monitor
    /// - `Err(MonitorError::InvalidChannelName)` - Empty or literal "null" input
    /// - `Err(MonitorError::AlreadyExists)` - The pair is already registered
    pub async fn register_monitor(
        &self,
        guild_id: &str,
        twitch_channel: &str,
        discord_channel_id: &str,
    ) -> Result<Monitor, AppError> {
        let name = normalize_channel_name(twitch_channel)?;

        let repo = MonitorRepository::new(self.db);

        if repo.get(guild_id, &name).await?.is_some() {
            return Err(MonitorError::AlreadyExists(name).into());
        }

        let monitor = repo.create(guild_id, &name, discord_channel_id).await?;

        tracing::info!(
            "guild {} now monitoring '{}' into channel {}",
            guild_id,
            monitor.twitch_channel,
            monitor.discord_channel_id
        );

        Ok(monitor)
    }

    /// Lists the channels a guild currently monitors.
    pub async fn list_monitors(&self, guild_id: &str) -> Result<Vec<Monitor>, AppError> {
        let monitors = MonitorRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(monitors)
    }

    /// Stops monitoring a Twitch channel in a guild.
    ///
    /// # Returns
    /// - `Ok(())` - The monitor was removed
    /// - `Err(MonitorError::NotFound)` - The pair was not registered
    pub async fn unregister_monitor(
        &self,
        guild_id: &str,
        twitch_channel: &str,
    ) -> Result<(), AppError> {
        let name = normalize_channel_name(twitch_channel)?;

        let deleted = MonitorRepository::new(self.db)
            .delete(guild_id, &name)
            .await?;

        if deleted == 0 {
            return Err(MonitorError::NotFound(name).into());
        }

        tracing::info!("guild {} stopped monitoring '{}'", guild_id, name);

        Ok(())
    }
}

/// Trims and lowercases a channel name, rejecting malformed input.
///
/// An empty or whitespace-only name, or the literal "null" in any case, is
/// rejected before any store access.
pub(crate) fn normalize_channel_name(raw: &str) -> Result<String, MonitorError> {
    let name = raw.trim().to_lowercase();

    if name.is_empty() || name == "null" {
        return Err(MonitorError::InvalidChannelName);
    }

    Ok(name)
}
