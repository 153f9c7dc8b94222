pub mod guild_config;
pub mod guild_layout;
pub mod voice_transition;

pub use guild_config::GuildConfig;
pub use guild_layout::{ChannelEntry, ChannelKind, GuildLayout};
pub use voice_transition::{VoiceChannel, VoiceTransition};
