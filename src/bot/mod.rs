//! Discord bot front-end for managing monitored Twitch channels.
//!
//! This module provides the Discord-facing half of the application: the gateway
//! client, the slash commands guild admins use to register and remove monitored
//! Twitch channels, and the startup notice sent to the bot owner.
//!
//! The bot's HTTP client is shared with the clip poll scheduler so clip
//! notifications are sent over the same connection pool as command responses.
//!
//! # Gateway Intents
//!
//! The bot only requires the `GUILDS` intent; slash command interactions and
//! outbound messages need no privileged intents.

pub mod command;
pub mod handler;
pub mod start;
