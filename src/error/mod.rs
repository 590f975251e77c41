//! Error types for the clipwatch bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors (configuration,
//! monitor registration) alongside infrastructure errors from the database, HTTP
//! client, Discord client, and scheduler. Nothing in the poll loop is fatal; only
//! startup errors terminate the process.

pub mod config;
pub mod monitor;

use thiserror::Error;

use crate::error::{config::ConfigError, monitor::MonitorError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion. `MonitorError` carries
/// the user-visible command failures; everything else is logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// The only fatal error class: the process exits when configuration is invalid.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Monitor registration error.
    ///
    /// User-visible; rendered into the slash command response by the bot front-end.
    #[error(transparent)]
    MonitorErr(#[from] MonitorError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised by Twitch API calls; the affected poll run is skipped and retried
    /// on the next tick.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// The Twitch API answered with a non-success status.
    ///
    /// Covers expired credentials (401), rate limiting, and upstream outages.
    /// Treated like a network error: logged, poll skipped for the tick.
    #[error("Twitch API error: {0}")]
    Upstream(String),

    /// Internal error with custom message.
    ///
    /// Used for malformed stored data, such as a Discord channel id that fails
    /// to parse.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
