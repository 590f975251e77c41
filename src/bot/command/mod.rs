//! Slash command definitions and dispatch.
//!
//! Three guild-scoped commands manage clip monitoring:
//! - `/clipz` registers a Twitch channel and a destination Discord channel
//! - `/cliplist` lists the channels monitored in the guild
//! - `/unclipz` stops monitoring a channel
//!
//! Every response is ephemeral. Monitor errors are shown to the invoking user
//! verbatim; anything else is logged and replaced with a generic message so
//! internals never leak into Discord.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage, Permissions, ResolvedOption,
    ResolvedValue,
};

use crate::error::AppError;

pub mod cliplist;
pub mod clipz;
pub mod unclipz;

/// The global slash commands registered on startup.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("clipz")
            .description("Start posting new clips from a Twitch channel")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "twitch_channel",
                    "Twitch channel name to monitor",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "discord_channel",
                    "Discord channel to post new clips in",
                )
                .required(true),
            ),
        CreateCommand::new("cliplist")
            .description("List the Twitch channels monitored in this server")
            .dm_permission(false),
        CreateCommand::new("unclipz")
            .description("Stop posting clips from a Twitch channel")
            .default_member_permissions(Permissions::MANAGE_GUILD)
            .dm_permission(false)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "twitch_channel",
                    "Twitch channel name to stop monitoring",
                )
                .required(true),
            ),
    ]
}

/// Dispatches a command interaction and sends the ephemeral response.
pub async fn handle_command(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: CommandInteraction,
) {
    let content = match run_command(db, &interaction).await {
        Ok(content) => content,
        Err(AppError::MonitorErr(e)) => format!("⚠️ {}", e),
        Err(e) => {
            tracing::error!(
                "Error handling /{} command: {}",
                interaction.data.name,
                e
            );
            "Something went wrong handling that command. Please try again later.".to_string()
        }
    };

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = interaction.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to interaction: {:?}", e);
    }
}

/// Runs the named command and returns the response text.
async fn run_command(
    db: &DatabaseConnection,
    interaction: &CommandInteraction,
) -> Result<String, AppError> {
    let Some(guild_id) = interaction.guild_id else {
        return Ok("This command can only be used in a server.".to_string());
    };
    let guild_id = guild_id.get().to_string();

    match interaction.data.name.as_str() {
        "clipz" => clipz::run(db, &guild_id, interaction).await,
        "cliplist" => cliplist::run(db, &guild_id).await,
        "unclipz" => unclipz::run(db, &guild_id, interaction).await,
        other => {
            tracing::warn!("Received unknown command: /{}", other);
            Ok("Unknown command.".to_string())
        }
    }
}

/// Finds a required string option by name.
fn str_option<'a>(options: &[ResolvedOption<'a>], name: &str) -> Result<&'a str, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == name => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::InternalError(format!("Missing required option '{}'", name)))
}

/// Finds a required channel option by name.
fn channel_option(options: &[ResolvedOption<'_>], name: &str) -> Result<ChannelId, AppError> {
    options
        .iter()
        .find_map(|option| match option.value {
            ResolvedValue::Channel(channel) if option.name == name => Some(channel.id),
            _ => None,
        })
        .ok_or_else(|| AppError::InternalError(format!("Missing required option '{}'", name)))
}
