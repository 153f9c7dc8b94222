use std::sync::RwLock;

use crate::domain::entities::GuildConfig;
use crate::domain::repositories::{ConfigStoreError, GuildConfigRepository};

/// In-memory implementation of GuildConfigRepository.
/// Nothing is persisted; backs the service and dispatcher tests.
#[derive(Default)]
pub struct InMemoryConfigRepository {
    data: RwLock<GuildConfig>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuildConfigRepository for InMemoryConfigRepository {
    fn set_log_channel(&self, guild_id: u64, channel_id: u64) -> Result<(), ConfigStoreError> {
        if let Ok(mut data) = self.data.write() {
            data.set_log_channel(guild_id, channel_id);
        }
        Ok(())
    }

    fn get_log_channel(&self, guild_id: u64) -> Option<u64> {
        self.data.read().ok()?.log_channel(guild_id)
    }
}
