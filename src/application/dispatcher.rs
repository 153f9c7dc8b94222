use crate::application::services::{
    ConfigService, ConfigServiceError, LogChannelResolver, MessageSink, voice_formatter,
};
use crate::domain::entities::{GuildLayout, VoiceChannel, VoiceTransition};
use tracing::{debug, error, info, warn};

pub const PERMISSION_DENIED_MESSAGE: &str =
    "❌ You need **administrator** permissions to use this command";
pub const MISSING_ARGUMENT_MESSAGE: &str =
    "❌ Please mention a channel, e.g. `!setlog #voice-log`";
pub const INVALID_CHANNEL_MESSAGE: &str = "❌ That is not a text channel in this server";
pub const STORE_FAILED_MESSAGE: &str = "❌ Failed to save the voice log channel";

/// Result of an attempt to change a guild's log channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetLogChannelOutcome {
    Updated(u64),
    PermissionDenied,
    MissingArgument,
    InvalidChannel,
    StoreFailed,
}

impl SetLogChannelOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Updated(channel_id) => format!("Voice log channel set to <#{}>", channel_id),
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE.to_string(),
            Self::MissingArgument => MISSING_ARGUMENT_MESSAGE.to_string(),
            Self::InvalidChannel => INVALID_CHANNEL_MESSAGE.to_string(),
            Self::StoreFailed => STORE_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Accepts a channel mention (`<#123>`) or a bare channel id.
pub fn parse_channel_argument(argument: &str) -> Option<u64> {
    let argument = argument.trim();
    let raw = argument
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(argument);
    raw.parse::<u64>().ok().filter(|id| *id != 0)
}

/// Per-event handling for voice updates and the log channel command.
///
/// Holds no per-event state; the only mutable state is the guild config behind
/// `ConfigService`.
pub struct VoiceLogDispatcher {
    config_service: ConfigService,
    resolver: LogChannelResolver,
}

impl VoiceLogDispatcher {
    pub fn new(config_service: ConfigService, resolver: LogChannelResolver) -> Self {
        Self {
            config_service,
            resolver,
        }
    }

    pub async fn on_voice_state_changed(
        &self,
        sink: &dyn MessageSink,
        guild: &GuildLayout,
        user: &str,
        before: Option<u64>,
        after: Option<u64>,
    ) {
        let transition = VoiceTransition::classify(
            before.map(|id| Self::voice_channel(guild, id)),
            after.map(|id| Self::voice_channel(guild, id)),
        );

        let Some(message) = voice_formatter::render(user, &transition) else {
            debug!("Voice state update for {} without channel change", user);
            return;
        };

        let Some(log_channel) = self.resolver.resolve(guild) else {
            warn!(
                "No eligible log channel in guild {}, dropping voice update",
                guild.guild_id
            );
            return;
        };

        if let Err(e) = sink.send(log_channel, &message).await {
            error!("{}", e);
        }
    }

    /// Validates and applies a log channel change. Checks run in order:
    /// permission, presence of an argument, then that it names a text
    /// channel of this guild. Nothing is stored unless all pass.
    pub fn set_log_channel(
        &self,
        guild: &GuildLayout,
        is_admin: bool,
        argument: Option<&str>,
    ) -> SetLogChannelOutcome {
        if !is_admin {
            return SetLogChannelOutcome::PermissionDenied;
        }

        let Some(argument) = argument.map(str::trim).filter(|a| !a.is_empty()) else {
            return SetLogChannelOutcome::MissingArgument;
        };

        let Some(channel) = parse_channel_argument(argument).and_then(|id| guild.text_channel(id))
        else {
            return SetLogChannelOutcome::InvalidChannel;
        };

        match self.config_service.set_log_channel(guild.guild_id, channel.id) {
            Ok(()) => {
                info!(
                    "Voice log channel for guild {} set to {} ({})",
                    guild.guild_id, channel.name, channel.id
                );
                SetLogChannelOutcome::Updated(channel.id)
            }
            Err(ConfigServiceError::InvalidGuild | ConfigServiceError::InvalidChannel) => {
                SetLogChannelOutcome::InvalidChannel
            }
            Err(e) => {
                error!("Failed to set voice log channel for guild {}: {}", guild.guild_id, e);
                SetLogChannelOutcome::StoreFailed
            }
        }
    }

    /// Prefix command entry point; the reply goes to the channel the command came from.
    pub async fn on_admin_set_log_channel(
        &self,
        sink: &dyn MessageSink,
        reply_channel: u64,
        guild: &GuildLayout,
        is_admin: bool,
        argument: Option<&str>,
    ) -> SetLogChannelOutcome {
        let outcome = self.set_log_channel(guild, is_admin, argument);
        if let Err(e) = sink.send(reply_channel, &outcome.message()).await {
            error!("{}", e);
        }
        outcome
    }

    fn voice_channel(guild: &GuildLayout, channel_id: u64) -> VoiceChannel {
        let name = guild
            .channel(channel_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("<#{}>", channel_id));
        VoiceChannel::new(channel_id, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::notification_service::DeliveryError;
    use crate::domain::entities::{ChannelEntry, ChannelKind};
    use crate::infrastructure::repositories::InMemoryConfigRepository;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const GUILD: u64 = 500;
    const GENERAL: u64 = 1;
    const VOICE_LOG: u64 = 2;
    const LOUNGE: u64 = 10;
    const GAMING: u64 = 11;

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<(u64, String)>>,
        fail: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn sent(&self) -> Vec<(u64, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageSink for RecordingSink {
        async fn send(&self, channel_id: u64, content: &str) -> Result<(), DeliveryError> {
            self.sent
                .lock()
                .unwrap()
                .push((channel_id, content.to_string()));
            if self.fail {
                return Err(DeliveryError {
                    channel_id,
                    reason: "Missing Access".to_string(),
                });
            }
            Ok(())
        }
    }

    fn guild() -> GuildLayout {
        GuildLayout::new(
            GUILD,
            [
                ChannelEntry::new(GENERAL, "general", ChannelKind::Text, 0),
                ChannelEntry::new(VOICE_LOG, "voice-log", ChannelKind::Text, 1),
                ChannelEntry::new(LOUNGE, "Lounge", ChannelKind::Voice, 0),
                ChannelEntry::new(GAMING, "Gaming", ChannelKind::Voice, 1),
            ],
        )
    }

    fn dispatcher() -> (VoiceLogDispatcher, ConfigService) {
        let config_service = ConfigService::new(Arc::new(InMemoryConfigRepository::new()));
        let resolver = LogChannelResolver::new(config_service.clone(), None);
        (
            VoiceLogDispatcher::new(config_service.clone(), resolver),
            config_service,
        )
    }

    #[test]
    fn parses_mentions_and_bare_ids() {
        assert_eq!(parse_channel_argument("<#123>"), Some(123));
        assert_eq!(parse_channel_argument(" 456 "), Some(456));
        assert_eq!(parse_channel_argument("#voice-log"), None);
        assert_eq!(parse_channel_argument("<@123>"), None);
        assert_eq!(parse_channel_argument("0"), None);
    }

    #[tokio::test]
    async fn join_is_logged_to_general_by_default() {
        let sink = RecordingSink::default();
        let (dispatcher, _) = dispatcher();

        dispatcher
            .on_voice_state_changed(&sink, &guild(), "alice", None, Some(LOUNGE))
            .await;

        assert_eq!(
            sink.sent(),
            vec![(GENERAL, "🔊 alice has joined Lounge".to_string())]
        );
    }

    #[tokio::test]
    async fn move_is_logged_to_configured_channel() {
        let sink = RecordingSink::default();
        let (dispatcher, config) = dispatcher();
        config.set_log_channel(GUILD, VOICE_LOG).unwrap();

        dispatcher
            .on_voice_state_changed(&sink, &guild(), "bob", Some(LOUNGE), Some(GAMING))
            .await;

        assert_eq!(
            sink.sent(),
            vec![(VOICE_LOG, "🔄 bob has moved from Lounge to Gaming".to_string())]
        );
    }

    #[tokio::test]
    async fn bot_accounts_are_logged_like_members() {
        let sink = RecordingSink::default();
        let (dispatcher, _) = dispatcher();

        dispatcher
            .on_voice_state_changed(&sink, &guild(), "MusicBot", None, Some(GAMING))
            .await;
        dispatcher
            .on_voice_state_changed(&sink, &guild(), "MusicBot", Some(GAMING), None)
            .await;

        assert_eq!(
            sink.sent(),
            vec![
                (GENERAL, "🔊 MusicBot has joined Gaming".to_string()),
                (GENERAL, "❌ MusicBot has left Gaming".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn unchanged_channel_sends_nothing() {
        let sink = RecordingSink::default();
        let (dispatcher, _) = dispatcher();

        dispatcher
            .on_voice_state_changed(&sink, &guild(), "carol", Some(LOUNGE), Some(LOUNGE))
            .await;

        assert!(sink.sent().is_empty());
    }

    #[tokio::test]
    async fn guild_without_text_channels_sends_nothing() {
        let sink = RecordingSink::default();
        let (dispatcher, _) = dispatcher();
        let voice_only = GuildLayout::new(
            GUILD,
            [ChannelEntry::new(LOUNGE, "Lounge", ChannelKind::Voice, 0)],
        );

        dispatcher
            .on_voice_state_changed(&sink, &voice_only, "dave", Some(LOUNGE), None)
            .await;

        assert!(sink.sent().is_empty());
    }

    #[tokio::test]
    async fn delivery_failure_does_not_affect_next_event() {
        let sink = RecordingSink::failing();
        let (dispatcher, _) = dispatcher();

        dispatcher
            .on_voice_state_changed(&sink, &guild(), "erin", None, Some(LOUNGE))
            .await;
        dispatcher
            .on_voice_state_changed(&sink, &guild(), "erin", Some(LOUNGE), None)
            .await;

        assert_eq!(sink.sent().len(), 2);
        assert_eq!(sink.sent()[1].1, "❌ erin has left Lounge");
    }

    #[tokio::test]
    async fn admin_sets_channel_and_gets_confirmation() {
        let sink = RecordingSink::default();
        let (dispatcher, config) = dispatcher();

        let outcome = dispatcher
            .on_admin_set_log_channel(&sink, GENERAL, &guild(), true, Some("<#2>"))
            .await;

        assert_eq!(outcome, SetLogChannelOutcome::Updated(VOICE_LOG));
        assert_eq!(config.get_log_channel(GUILD), Some(VOICE_LOG));
        assert_eq!(
            sink.sent(),
            vec![(GENERAL, "Voice log channel set to <#2>".to_string())]
        );
    }

    #[tokio::test]
    async fn non_admin_cannot_change_channel() {
        let sink = RecordingSink::default();
        let (dispatcher, config) = dispatcher();

        let outcome = dispatcher
            .on_admin_set_log_channel(&sink, GENERAL, &guild(), false, Some("<#2>"))
            .await;

        assert_eq!(outcome, SetLogChannelOutcome::PermissionDenied);
        assert_eq!(config.get_log_channel(GUILD), None);
        assert_eq!(
            sink.sent(),
            vec![(GENERAL, PERMISSION_DENIED_MESSAGE.to_string())]
        );
    }

    #[test]
    fn bad_arguments_are_reported_without_mutation() {
        let (dispatcher, config) = dispatcher();
        let guild = guild();

        assert_eq!(
            dispatcher.set_log_channel(&guild, true, None),
            SetLogChannelOutcome::MissingArgument
        );
        assert_eq!(
            dispatcher.set_log_channel(&guild, true, Some("   ")),
            SetLogChannelOutcome::MissingArgument
        );
        assert_eq!(
            dispatcher.set_log_channel(&guild, true, Some("#nope")),
            SetLogChannelOutcome::InvalidChannel
        );
        // voice channels and channels of other guilds are rejected
        assert_eq!(
            dispatcher.set_log_channel(&guild, true, Some("<#10>")),
            SetLogChannelOutcome::InvalidChannel
        );
        assert_eq!(
            dispatcher.set_log_channel(&guild, true, Some("<#999>")),
            SetLogChannelOutcome::InvalidChannel
        );
        assert_eq!(config.get_log_channel(GUILD), None);
    }

    #[test]
    fn permission_is_checked_before_arguments() {
        let (dispatcher, _) = dispatcher();

        assert_eq!(
            dispatcher.set_log_channel(&guild(), false, None),
            SetLogChannelOutcome::PermissionDenied
        );
    }
}
