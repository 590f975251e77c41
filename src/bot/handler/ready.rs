//! Ready event handler for bot initialization.
//!
//! Fired once per connection after the gateway handshake completes. Used to
//! register the global slash commands and to send the bot owner a startup
//! notice with the current monitor count.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Command, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, Ready, Timestamp, UserId,
};

use crate::bot::command;
use crate::data::monitor::MonitorRepository;
use crate::error::AppError;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global slash commands and sends the owner a direct message.
/// Both steps are best-effort: a failure is logged and the bot keeps running,
/// since previously registered commands remain usable.
///
/// # Arguments
/// - `db` - Database connection for the monitor count
/// - `bot_owner_id` - Discord user id to send the startup notice to
/// - `ctx` - Discord context for HTTP access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(db: &DatabaseConnection, bot_owner_id: &str, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }

    if let Err(e) = notify_owner(db, bot_owner_id, &ctx).await {
        tracing::warn!("Failed to send startup notice to bot owner: {}", e);
    }
}

/// Sends the bot owner a direct message with the number of monitored channels.
async fn notify_owner(
    db: &DatabaseConnection,
    bot_owner_id: &str,
    ctx: &Context,
) -> Result<(), AppError> {
    let owner_id = bot_owner_id
        .parse::<u64>()
        .map_err(|e| AppError::InternalError(format!("Invalid BOT_OWNER_ID: {}", e)))?;

    let monitored = MonitorRepository::new(db).count().await?;

    let embed = CreateEmbed::new()
        .title("Clipwatch online")
        .description(format!(
            "Connected to Discord and watching **{}** Twitch channel(s).",
            monitored
        ))
        .footer(CreateEmbedFooter::new("clipwatch"))
        .timestamp(Timestamp::now());

    let dm = UserId::new(owner_id).create_dm_channel(&ctx.http).await?;

    dm.id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}
