use chrono::{DateTime, Utc};

/// A single Twitch clip as surfaced by the Helix clips endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    /// Stable clip identifier, the dedup key.
    pub id: String,
    /// Clip title; may be empty.
    pub title: String,
    /// Public watch URL.
    pub url: String,
    /// Preview image URL.
    pub thumbnail_url: String,
    /// Display name of the channel the clip was taken from.
    pub broadcaster_name: String,
    /// Display name of the user who created the clip.
    pub creator_name: String,
    /// When the clip was created on Twitch.
    pub created_at: DateTime<Utc>,
}
