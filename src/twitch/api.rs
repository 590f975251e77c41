//! Wire types for the Twitch endpoints this bot consumes.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::Clip;

/// Response of the OAuth2 client-credentials token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds; a conservative default is applied when absent.
    pub expires_in: Option<u64>,
}

/// Response of the user-lookup-by-login endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<UserData>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: String,
}

/// Response of the clips-by-broadcaster endpoint.
#[derive(Debug, Deserialize)]
pub struct ClipsResponse {
    pub data: Vec<ClipData>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClipData {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub broadcaster_name: String,
    #[serde(default)]
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ClipData> for Clip {
    fn from(data: ClipData) -> Self {
        Clip {
            id: data.id,
            title: data.title,
            url: data.url,
            thumbnail_url: data.thumbnail_url,
            broadcaster_name: data.broadcaster_name,
            creator_name: data.creator_name,
            created_at: data.created_at,
        }
    }
}
