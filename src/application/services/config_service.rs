use crate::domain::repositories::{ConfigStoreError, GuildConfigRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ConfigServiceError {
    #[error("Invalid guild ID")]
    InvalidGuild,
    #[error("Invalid channel ID")]
    InvalidChannel,
    #[error("Failed to persist guild config: {0}")]
    Store(#[from] ConfigStoreError),
}

#[derive(Clone)]
pub struct ConfigService {
    config_repo: Arc<dyn GuildConfigRepository>,
}

impl ConfigService {
    pub fn new(config_repo: Arc<dyn GuildConfigRepository>) -> Self {
        Self { config_repo }
    }

    pub fn set_log_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), ConfigServiceError> {
        if guild_id == 0 {
            return Err(ConfigServiceError::InvalidGuild);
        }

        if channel_id == 0 {
            return Err(ConfigServiceError::InvalidChannel);
        }

        self.config_repo.set_log_channel(guild_id, channel_id)?;
        Ok(())
    }

    pub fn get_log_channel(&self, guild_id: u64) -> Option<u64> {
        self.config_repo.get_log_channel(guild_id)
    }
}
