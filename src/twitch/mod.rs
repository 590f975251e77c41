//! Twitch Helix API client.
//!
//! Handles the app-access-token lifecycle, broadcaster lookups, and paginated
//! clip fetches. The scheduler consumes this module through the `ClipSource`
//! trait so poll runs can be exercised against scripted sources in tests.

pub mod api;
pub mod client;

use serenity::async_trait;

use crate::{error::AppError, model::Clip};

pub use client::TwitchClient;

/// One page of clips for a broadcaster.
#[derive(Debug, Clone, Default)]
pub struct ClipsPage {
    /// Clips in upstream page order.
    pub clips: Vec<Clip>,
    /// Opaque cursor for the next page; absent on the last page.
    pub next_cursor: Option<String>,
}

/// The upstream feed the poll scheduler reconciles against.
#[async_trait]
pub trait ClipSource {
    /// Resolves a channel login to its stable broadcaster id.
    ///
    /// Returns `Ok(None)` when the channel does not exist upstream; that is
    /// not an error condition.
    async fn resolve_broadcaster_id(&self, channel_name: &str) -> Result<Option<String>, AppError>;

    /// Fetches one page of clips for a broadcaster, following the given cursor.
    async fn fetch_clips_page(
        &self,
        broadcaster_id: &str,
        cursor: Option<&str>,
    ) -> Result<ClipsPage, AppError>;
}
