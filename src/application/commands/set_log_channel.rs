use crate::application::dispatcher::VoiceLogDispatcher;
use crate::domain::entities::GuildLayout;
use serenity::{
    all::{CommandDataOptionValue, CommandInteraction, CreateInteractionResponse},
    builder::{CreateCommand, CreateCommandOption, CreateInteractionResponseMessage},
    model::{channel::ChannelType, permissions::Permissions, prelude::CommandOptionType},
    prelude::*,
};
use tracing::error;

pub const COMMAND_PREFIX: char = '!';
pub const COMMAND_NAME: &str = "setlog";

/// Recognizes `!setlog [channel]`. Returns `None` for any other message and
/// `Some(None)` when the command was given without an argument.
pub fn parse_prefix_command(content: &str) -> Option<Option<&str>> {
    let rest = content.trim_start().strip_prefix(COMMAND_PREFIX)?;
    let mut words = rest.split_whitespace();
    if words.next()? != COMMAND_NAME {
        return None;
    }
    Some(words.next())
}

/// Register the /setlog command
pub fn register_set_log_channel_command() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("Set the channel where voice activity is logged (Admin only)")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Select the channel for voice activity logs",
            )
            .channel_types(vec![ChannelType::Text, ChannelType::News])
            .required(true),
        )
}

/// Run /setlog; answers ephemerally with the same messages as the prefix command.
pub async fn run_set_log_channel(
    ctx: &Context,
    command: &CommandInteraction,
    dispatcher: &VoiceLogDispatcher,
    guild: Option<GuildLayout>,
) {
    let content = match guild {
        Some(guild) => {
            let is_admin = command.member.as_ref().is_some_and(|member| {
                member
                    .permissions
                    .is_some_and(|perms| perms.administrator())
            });

            let channel_id = command.data.options.first().and_then(|opt| match &opt.value {
                CommandDataOptionValue::Channel(channel_id) => Some(channel_id.get().to_string()),
                _ => None,
            });

            dispatcher
                .set_log_channel(&guild, is_admin, channel_id.as_deref())
                .message()
        }
        None => "❌ This command can only be used in a server".to_string(),
    };

    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(err) = command.create_response(&ctx.http, builder).await {
        error!("Error executing /{}: {}", COMMAND_NAME, err);
    }
}
