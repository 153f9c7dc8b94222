/// Kind of a guild channel, reduced to what voice logging cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub id: u64,
    pub name: String,
    pub kind: ChannelKind,
    pub position: u16,
}

impl ChannelEntry {
    pub fn new(id: u64, name: impl Into<String>, kind: ChannelKind, position: u16) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position,
        }
    }
}

/// Snapshot of a guild's channels taken at event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildLayout {
    pub guild_id: u64,
    channels: Vec<ChannelEntry>,
}

impl GuildLayout {
    pub fn new(guild_id: u64, channels: impl IntoIterator<Item = ChannelEntry>) -> Self {
        Self {
            guild_id,
            channels: channels.into_iter().collect(),
        }
    }

    pub fn channel(&self, channel_id: u64) -> Option<&ChannelEntry> {
        self.channels.iter().find(|c| c.id == channel_id)
    }

    pub fn text_channel(&self, channel_id: u64) -> Option<&ChannelEntry> {
        self.channel(channel_id)
            .filter(|c| c.kind == ChannelKind::Text)
    }

    /// Text channels in the order the client lists them: by position, ties by id.
    pub fn text_channels(&self) -> Vec<&ChannelEntry> {
        let mut text: Vec<&ChannelEntry> = self
            .channels
            .iter()
            .filter(|c| c.kind == ChannelKind::Text)
            .collect();
        text.sort_by_key(|c| (c.position, c.id));
        text
    }
}
