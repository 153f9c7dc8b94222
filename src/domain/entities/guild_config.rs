use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-guild voice log channel selection.
///
/// Serialized as a JSON object keyed by the guild id as a string, with the
/// channel id as an integer value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildConfig {
    log_channels: BTreeMap<u64, u64>,
}

impl GuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_channel(&self, guild_id: u64) -> Option<u64> {
        self.log_channels.get(&guild_id).copied()
    }

    pub fn set_log_channel(&mut self, guild_id: u64, channel_id: u64) {
        self.log_channels.insert(guild_id, channel_id);
    }

    pub fn len(&self) -> usize {
        self.log_channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_channels.is_empty()
    }
}

impl FromIterator<(u64, u64)> for GuildConfig {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        Self {
            log_channels: iter.into_iter().collect(),
        }
    }
}
