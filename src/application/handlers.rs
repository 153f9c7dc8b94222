use crate::application::commands::set_log_channel::COMMAND_NAME;
use crate::application::commands::{
    parse_prefix_command, register_help_command, register_set_log_channel_command,
    run_help_command, run_set_log_channel,
};
use crate::application::dispatcher::VoiceLogDispatcher;
use crate::application::services::NotificationService;
use crate::infrastructure::discord_bot::guild_snapshot::guild_layout;

use serenity::model::{
    application::Interaction, channel::Message, gateway::Ready, voice::VoiceState,
};
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub struct VoiceLogHandler {
    pub dispatcher: Arc<VoiceLogDispatcher>,
}

#[serenity::async_trait]
impl EventHandler for VoiceLogHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} has connected to Discord!", ready.user.name);
        info!("Bot is in {} guilds", ready.guilds.len());

        // register commands in each guild
        for guild_status in ready.guilds {
            let guild_id = guild_status.id;

            if let Err(e) = guild_id
                .set_commands(
                    &ctx.http,
                    vec![register_set_log_channel_command(), register_help_command()],
                )
                .await
            {
                warn!("Failed to register commands for guild {}: {}", guild_id, e);
                continue;
            }

            debug!("Commands registered for guild {}", guild_id.get());
        }
    }

    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let Some(guild_id) = new.guild_id else {
            return;
        };

        let user_name = match &new.member {
            Some(member) => member.display_name().to_string(),
            None => match new.user_id.to_user(&ctx).await {
                Ok(user) => user.display_name().to_string(),
                Err(e) => {
                    warn!("Could not look up user {} for voice update: {}", new.user_id, e);
                    return;
                }
            },
        };

        let Some(guild) = guild_layout(&ctx.cache, guild_id) else {
            warn!("Guild {} is not cached, dropping voice update", guild_id);
            return;
        };

        let before = old.and_then(|state| state.channel_id).map(|id| id.get());
        let after = new.channel_id.map(|id| id.get());

        let sink = NotificationService::new(ctx.http.clone());
        self.dispatcher
            .on_voice_state_changed(&sink, &guild, &user_name, before, after)
            .await;
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(guild_id) = msg.guild_id else {
            return;
        };

        let Some(argument) = parse_prefix_command(&msg.content) else {
            return;
        };

        let Some(guild) = guild_layout(&ctx.cache, guild_id) else {
            warn!("Guild {} is not cached, ignoring command", guild_id);
            return;
        };

        let is_admin = msg
            .author_permissions(&ctx.cache)
            .is_some_and(|perms| perms.administrator());

        let sink = NotificationService::new(ctx.http.clone());
        self.dispatcher
            .on_admin_set_log_channel(&sink, msg.channel_id.get(), &guild, is_admin, argument)
            .await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(command) = interaction.command() else {
            return;
        };

        debug!("Received command interaction: {}", command.data.name);
        match command.data.name.as_str() {
            COMMAND_NAME => {
                let guild = command
                    .guild_id
                    .and_then(|guild_id| guild_layout(&ctx.cache, guild_id));
                run_set_log_channel(&ctx, &command, &self.dispatcher, guild).await;
            }
            "help" => run_help_command(&ctx, &command).await,
            other => error!("Command not recognized: {}", other),
        }
    }
}
