use sea_orm::entity::prelude::*;

/// A monitored Twitch channel and the Discord channel its clips are posted to.
///
/// Uniqueness is (guild_id, twitch_channel); the same Twitch channel may be
/// monitored by any number of guilds. `twitch_channel` is stored lowercased.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub twitch_channel: String,
    pub discord_channel_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
