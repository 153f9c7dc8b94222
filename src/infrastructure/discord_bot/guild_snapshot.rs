use crate::domain::entities::{ChannelEntry, ChannelKind, GuildLayout};
use serenity::cache::Cache;
use serenity::model::channel::ChannelType;
use serenity::model::id::GuildId;

pub fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text | ChannelType::News => ChannelKind::Text,
        ChannelType::Voice | ChannelType::Stage => ChannelKind::Voice,
        _ => ChannelKind::Other,
    }
}

/// Copies the guild's channels out of the cache so no cache guard is held
/// across an await.
pub fn guild_layout(cache: &Cache, guild_id: GuildId) -> Option<GuildLayout> {
    let guild = cache.guild(guild_id)?;
    let channels: Vec<ChannelEntry> = guild
        .channels
        .values()
        .map(|channel| {
            ChannelEntry::new(
                channel.id.get(),
                channel.name.clone(),
                channel_kind(channel.kind),
                channel.position,
            )
        })
        .collect();

    Some(GuildLayout::new(guild_id.get(), channels))
}
