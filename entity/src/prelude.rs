pub use super::channel_config::Entity as ChannelConfig;
pub use super::seen_clip::Entity as SeenClip;
