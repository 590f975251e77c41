pub mod prelude;

pub mod channel_config;
pub mod seen_clip;
