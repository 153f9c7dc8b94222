use crate::application::dispatcher::VoiceLogDispatcher;
use crate::application::handlers::VoiceLogHandler;
use crate::application::services::{ConfigService, LogChannelResolver};
use crate::infrastructure::repositories::JsonConfigRepository;
use crate::infrastructure::settings::Settings;

use anyhow::anyhow;
use serenity::gateway::GatewayError;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

/// Connects to the gateway and runs until the connection ends or Ctrl-C.
pub async fn run_bot(settings: Settings) -> anyhow::Result<()> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let config_repo = Arc::new(JsonConfigRepository::new(&settings.guild_config_path));
    let config_service = ConfigService::new(config_repo);
    let resolver = LogChannelResolver::new(config_service.clone(), settings.fallback_log_channel);
    let handler = VoiceLogHandler {
        dispatcher: Arc::new(VoiceLogDispatcher::new(config_service, resolver)),
    };

    let mut client = Client::builder(&settings.discord_token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested, closing gateway connection");
            shard_manager.shutdown_all().await;
        }
    });

    match client.start().await {
        Ok(()) => Ok(()),
        Err(serenity::Error::Gateway(GatewayError::InvalidAuthentication)) => {
            error!("Invalid token provided");
            Err(anyhow!("Discord rejected the bot token"))
        }
        Err(e) => Err(e.into()),
    }
}
