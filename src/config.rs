use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub bot_owner_id: String,

    pub twitch_client_id: String,
    pub twitch_client_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            bot_owner_id: std::env::var("BOT_OWNER_ID")
                .map_err(|_| ConfigError::MissingEnvVar("BOT_OWNER_ID".to_string()))?,
            twitch_client_id: std::env::var("TWITCH_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("TWITCH_CLIENT_ID".to_string()))?,
            twitch_client_secret: std::env::var("TWITCH_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("TWITCH_CLIENT_SECRET".to_string()))?,
        })
    }
}
