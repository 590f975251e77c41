use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serenity::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::AppError,
    twitch::{
        api::{ClipsResponse, TokenResponse, UsersResponse},
        ClipSource, ClipsPage,
    },
};

const TOKEN_ENDPOINT: &str = "https://id.twitch.tv/oauth2/token";
const USERS_ENDPOINT: &str = "https://api.twitch.tv/helix/users";
const CLIPS_ENDPOINT: &str = "https://api.twitch.tv/helix/clips";

/// Upstream maximum page size; using it minimizes request count per walk.
const PAGE_SIZE: &str = "50";

/// Applied when the token response carries no expiry.
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Tokens are treated as expired this long before their reported expiry, so a
/// token never goes stale mid page-walk.
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// Broadcaster ids are stable; cache lookups for an hour to avoid spending a
/// request per monitor per tick.
const BROADCASTER_CACHE_TTL: Duration = Duration::from_secs(3600);

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

struct CachedBroadcaster {
    id: String,
    cached_at: Instant,
}

/// Twitch Helix API client with process-wide token and broadcaster caches.
///
/// The token is fetched lazily via the client-credentials grant and refreshed
/// on the first call after expiry. A 401 from any endpoint invalidates the
/// cache so the next call fetches a fresh token; the failing call itself
/// surfaces as an upstream error and the affected poll run is retried on the
/// next tick. Concurrent refreshes are serialized through the write lock.
pub struct TwitchClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    token: RwLock<Option<CachedToken>>,
    broadcasters: RwLock<HashMap<String, CachedBroadcaster>>,
}

impl TwitchClient {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            token: RwLock::new(None),
            broadcasters: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a valid app access token, fetching or refreshing as needed.
    async fn access_token(&self) -> Result<String, AppError> {
        {
            let token = self.token.read().await;
            if let Some(cached) = token.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let mut token = self.token.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(cached) = token.as_ref() {
            if cached.is_valid() {
                return Ok(cached.access_token.clone());
            }
        }

        let response = self
            .http
            .post(TOKEN_ENDPOINT)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let body: TokenResponse = response.json().await?;

        let ttl = body
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_TTL)
            .saturating_sub(TOKEN_REFRESH_MARGIN);

        *token = Some(CachedToken {
            access_token: body.access_token.clone(),
            expires_at: Instant::now() + ttl,
        });

        tracing::debug!("refreshed Twitch app access token");

        Ok(body.access_token)
    }

    /// Drops the cached token so the next call fetches a fresh one.
    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    /// Maps a non-success Helix status to an error, invalidating the token on 401.
    async fn upstream_error(&self, endpoint: &str, status: StatusCode) -> AppError {
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_token().await;
        }
        AppError::Upstream(format!("{} returned {}", endpoint, status))
    }
}

#[async_trait]
impl ClipSource for TwitchClient {
    async fn resolve_broadcaster_id(&self, channel_name: &str) -> Result<Option<String>, AppError> {
        {
            let cache = self.broadcasters.read().await;
            if let Some(cached) = cache.get(channel_name) {
                if cached.cached_at.elapsed() < BROADCASTER_CACHE_TTL {
                    return Ok(Some(cached.id.clone()));
                }
            }
        }

        let token = self.access_token().await?;

        let response = self
            .http
            .get(USERS_ENDPOINT)
            .bearer_auth(&token)
            .header("Client-Id", &self.client_id)
            .query(&[("login", channel_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.upstream_error("users endpoint", response.status()).await);
        }

        let body: UsersResponse = response.json().await?;
        let broadcaster_id = body.data.into_iter().next().map(|user| user.id);

        if let Some(id) = &broadcaster_id {
            self.broadcasters.write().await.insert(
                channel_name.to_string(),
                CachedBroadcaster {
                    id: id.clone(),
                    cached_at: Instant::now(),
                },
            );
        }

        Ok(broadcaster_id)
    }

    async fn fetch_clips_page(
        &self,
        broadcaster_id: &str,
        cursor: Option<&str>,
    ) -> Result<ClipsPage, AppError> {
        let token = self.access_token().await?;

        let mut request = self
            .http
            .get(CLIPS_ENDPOINT)
            .bearer_auth(&token)
            .header("Client-Id", &self.client_id)
            .query(&[("broadcaster_id", broadcaster_id), ("first", PAGE_SIZE)]);

        if let Some(cursor) = cursor {
            request = request.query(&[("after", cursor)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(self.upstream_error("clips endpoint", response.status()).await);
        }

        let body: ClipsResponse = response.json().await?;

        Ok(ClipsPage {
            clips: body.data.into_iter().map(Into::into).collect(),
            next_cursor: body.pagination.cursor,
        })
    }
}
