use sea_orm::DatabaseConnection;
use serenity::all::CommandInteraction;

use crate::error::AppError;
use crate::service::MonitorService;

/// Handles `/clipz`: registers a Twitch channel for clip monitoring.
pub async fn run(
    db: &DatabaseConnection,
    guild_id: &str,
    interaction: &CommandInteraction,
) -> Result<String, AppError> {
    let options = interaction.data.options();

    let twitch_channel = super::str_option(&options, "twitch_channel")?;
    let discord_channel = super::channel_option(&options, "discord_channel")?;

    let monitor = MonitorService::new(db)
        .register_monitor(guild_id, twitch_channel, &discord_channel.get().to_string())
        .await?;

    Ok(format!(
        "✅ Now monitoring **{}**. New clips will be posted in <#{}>.",
        monitor.twitch_channel, monitor.discord_channel_id
    ))
}
