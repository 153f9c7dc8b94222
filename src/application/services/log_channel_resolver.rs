use crate::application::services::config_service::ConfigService;
use crate::domain::entities::GuildLayout;

/// Picks the text channel voice notifications go to.
///
/// Order: the guild's configured channel, then the process-wide
/// `LOG_CHANNEL_ID` fallback, then a channel named "general", then the
/// first text channel. Configured ids that no longer point at a text channel
/// in the guild are skipped.
#[derive(Clone)]
pub struct LogChannelResolver {
    config_service: ConfigService,
    fallback_channel: Option<u64>,
}

impl LogChannelResolver {
    pub fn new(config_service: ConfigService, fallback_channel: Option<u64>) -> Self {
        Self {
            config_service,
            fallback_channel,
        }
    }

    pub fn resolve(&self, guild: &GuildLayout) -> Option<u64> {
        let configured = self.config_service.get_log_channel(guild.guild_id);

        configured
            .into_iter()
            .chain(self.fallback_channel)
            .find_map(|id| guild.text_channel(id))
            .or_else(|| {
                guild
                    .text_channels()
                    .into_iter()
                    .find(|c| c.name.eq_ignore_ascii_case("general"))
            })
            .or_else(|| guild.text_channels().into_iter().next())
            .map(|c| c.id)
    }
}
