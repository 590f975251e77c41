use thiserror::Error;

/// User-visible failures of the monitor admin commands.
///
/// These are rendered directly into the slash command response; they never
/// indicate a bug or an infrastructure problem, and they leave stored state
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// The (guild, twitch channel) pair is already registered.
    #[error("'{0}' is already being monitored in this server.")]
    AlreadyExists(String),

    /// Unregister was requested for a channel that is not registered.
    #[error("'{0}' is not being monitored in this server.")]
    NotFound(String),

    /// The channel name is empty, whitespace, or the literal "null".
    ///
    /// Guards against malformed command input reaching the store.
    #[error("That is not a valid Twitch channel name.")]
    InvalidChannelName,
}
