use sea_orm::DatabaseConnection;
use serenity::all::CommandInteraction;

use crate::error::AppError;
use crate::service::MonitorService;

/// Handles `/unclipz`: stops monitoring a Twitch channel.
pub async fn run(
    db: &DatabaseConnection,
    guild_id: &str,
    interaction: &CommandInteraction,
) -> Result<String, AppError> {
    let options = interaction.data.options();

    let twitch_channel = super::str_option(&options, "twitch_channel")?;

    MonitorService::new(db)
        .unregister_monitor(guild_id, twitch_channel)
        .await?;

    Ok(format!(
        "🛑 Stopped monitoring **{}**.",
        twitch_channel.trim().to_lowercase()
    ))
}
