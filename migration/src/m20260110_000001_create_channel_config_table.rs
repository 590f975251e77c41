use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One monitored Twitch channel per (guild, channel) pair
        manager
            .create_table(
                Table::create()
                    .table(ChannelConfig::Table)
                    .if_not_exists()
                    .col(string(ChannelConfig::GuildId).not_null())
                    .col(string(ChannelConfig::TwitchChannel).not_null())
                    .col(string(ChannelConfig::DiscordChannelId).not_null())
                    .col(
                        timestamp(ChannelConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ChannelConfig::GuildId)
                            .col(ChannelConfig::TwitchChannel),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for per-guild listing
        manager
            .create_index(
                Index::create()
                    .name("idx_channel_config_guild_id")
                    .table(ChannelConfig::Table)
                    .col(ChannelConfig::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_channel_config_guild_id")
                    .table(ChannelConfig::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ChannelConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelConfig {
    Table,
    GuildId,
    TwitchChannel,
    DiscordChannelId,
    CreatedAt,
}
