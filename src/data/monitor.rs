use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::Monitor;

/// Repository for monitored channel config database operations.
///
/// Provides CRUD operations for the (guild, twitch channel) → Discord channel
/// mapping, converting between entity models and domain models at the
/// repository boundary. Callers are expected to pass normalized (trimmed,
/// lowercased) channel names; the composite primary key enforces uniqueness
/// per (guild_id, twitch_channel).
pub struct MonitorRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> MonitorRepository<'a> {
    /// Creates a new repository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new channel config.
    ///
    /// Fails with a database error when the (guild_id, twitch_channel) pair
    /// already exists; the service layer pre-checks with `get` to surface a
    /// user-visible conflict instead.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild registering the monitor
    /// - `twitch_channel` - Normalized Twitch channel login
    /// - `discord_channel_id` - Destination Discord channel
    ///
    /// # Returns
    /// - `Ok(Monitor)` - Created monitor domain model
    /// - `Err(DbErr)` - Database error during insert (including key conflicts)
    pub async fn create(
        &self,
        guild_id: &str,
        twitch_channel: &str,
        discord_channel_id: &str,
    ) -> Result<Monitor, DbErr> {
        let entity = entity::prelude::ChannelConfig::insert(entity::channel_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            twitch_channel: ActiveValue::Set(twitch_channel.to_string()),
            discord_channel_id: ActiveValue::Set(discord_channel_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Monitor::from_entity(entity))
    }

    /// Retrieves a single channel config by its composite key.
    pub async fn get(
        &self,
        guild_id: &str,
        twitch_channel: &str,
    ) -> Result<Option<Monitor>, DbErr> {
        let entity = entity::prelude::ChannelConfig::find()
            .filter(entity::channel_config::Column::GuildId.eq(guild_id))
            .filter(entity::channel_config::Column::TwitchChannel.eq(twitch_channel))
            .one(self.db)
            .await?;

        Ok(entity.map(Monitor::from_entity))
    }

    /// Deletes a channel config by its composite key.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the config did not exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: &str, twitch_channel: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::ChannelConfig::delete_many()
            .filter(entity::channel_config::Column::GuildId.eq(guild_id))
            .filter(entity::channel_config::Column::TwitchChannel.eq(twitch_channel))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Retrieves all channel configs across all guilds.
    ///
    /// Read by the scheduler on every tick; ordering is irrelevant.
    pub async fn get_all(&self) -> Result<Vec<Monitor>, DbErr> {
        let entities = entity::prelude::ChannelConfig::find().all(self.db).await?;

        Ok(entities.into_iter().map(Monitor::from_entity).collect())
    }

    /// Retrieves all channel configs registered by one guild.
    pub async fn get_by_guild_id(&self, guild_id: &str) -> Result<Vec<Monitor>, DbErr> {
        let entities = entity::prelude::ChannelConfig::find()
            .filter(entity::channel_config::Column::GuildId.eq(guild_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Monitor::from_entity).collect())
    }

    /// Counts the monitored channels across all guilds.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ChannelConfig::find().count(self.db).await
    }
}
