use serenity::all::{
    CommandInteraction, CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::prelude::*;
use tracing::error;

pub fn register_help_command() -> CreateCommand {
    CreateCommand::new("help").description("Show available commands")
}

pub async fn run_help_command(ctx: &Context, command: &CommandInteraction) {
    let content = "\
**Voice activity logging**\n\
Joins, leaves and moves between voice channels are posted to the log channel.\n\
Without a configured channel, `#general` or the first text channel is used.\n\n\
**Commands:**\n\
`!setlog #channel` or `/setlog` - Set the voice log channel (Admin only)\n\
`/help` - Show this help message";

    let builder = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::default()
            .content(content)
            .ephemeral(true),
    );

    if let Err(err) = command.create_response(&ctx.http, builder).await {
        error!("Error executing /help: {}", err);
    }
}
