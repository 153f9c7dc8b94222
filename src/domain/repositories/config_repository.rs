#[derive(Debug, thiserror::Error)]
pub enum ConfigStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait GuildConfigRepository: Send + Sync {
    /// Stores the log channel for a guild. The new value is only visible to
    /// readers once it has been persisted.
    fn set_log_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), ConfigStoreError>;
    fn get_log_channel(&self, guild_id: u64) -> Option<u64>;
}
