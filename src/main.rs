mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod twitch;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::scheduler::clip_poller;
use crate::service::ClipPublisher;
use crate::twitch::TwitchClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let twitch = Arc::new(TwitchClient::new(
        config.twitch_client_id.clone(),
        config.twitch_client_secret.clone(),
    ));

    // Initialize the Discord bot and extract its HTTP client for the publisher
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    let publisher = Arc::new(ClipPublisher::new(discord_http));

    clip_poller::start_scheduler(db, twitch, publisher).await?;

    // Blocks until the bot shuts down
    bot::start::start_bot(bot_client).await?;

    Ok(())
}
