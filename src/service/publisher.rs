use std::sync::Arc;

use serenity::{
    all::{
        ChannelId, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateMessage,
        Timestamp,
    },
    async_trait,
    http::Http,
};

use crate::{error::AppError, model::Clip};

/// Twitch brand purple, matching the clip embeds users expect.
const EMBED_COLOR: u32 = 0x9146FF;

/// The destination surface clip notifications are delivered to.
///
/// The scheduler depends on this trait rather than on the Discord client so
/// poll runs can be exercised against recording sinks in tests.
#[async_trait]
pub trait ClipSink {
    /// Delivers one clip notification to the given Discord channel.
    async fn send(&self, channel_id: &str, clip: &Clip) -> Result<(), AppError>;
}

/// Formats clip notifications and sends them through the Discord HTTP client.
pub struct ClipPublisher {
    http: Arc<Http>,
}

impl ClipPublisher {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ClipSink for ClipPublisher {
    async fn send(&self, channel_id: &str, clip: &Clip) -> Result<(), AppError> {
        let channel_id = channel_id
            .parse::<u64>()
            .map_err(|e| AppError::InternalError(format!("Invalid channel ID: {}", e)))?;

        let button = CreateButton::new_link(&clip.url).label("🎬 Watch Clip");

        let message = CreateMessage::new()
            .embed(build_clip_embed(clip)?)
            .components(vec![CreateActionRow::Buttons(vec![button])]);

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}

/// Builds the notification embed for a clip.
fn build_clip_embed(clip: &Clip) -> Result<CreateEmbed, AppError> {
    let title = if clip.title.is_empty() {
        "Untitled Clip"
    } else {
        &clip.title
    };

    let broadcaster = if clip.broadcaster_name.is_empty() {
        "Unknown"
    } else {
        &clip.broadcaster_name
    };

    let creator = if clip.creator_name.is_empty() {
        "Anonymous"
    } else {
        &clip.creator_name
    };

    let timestamp = Timestamp::from_unix_timestamp(clip.created_at.timestamp())
        .map_err(|e| AppError::InternalError(format!("Invalid timestamp: {}", e)))?;

    let mut embed = CreateEmbed::new()
        .color(EMBED_COLOR)
        .title(title)
        .url(&clip.url)
        .field("Channel", broadcaster, true)
        .field("Clipped By", creator, true)
        .field(
            "Date",
            format!("<t:{}:f>", clip.created_at.timestamp()),
            true,
        )
        .footer(CreateEmbedFooter::new("clipwatch"))
        .timestamp(timestamp);

    if !clip.thumbnail_url.is_empty() {
        embed = embed.image(&clip.thumbnail_url);
    }

    Ok(embed)
}
