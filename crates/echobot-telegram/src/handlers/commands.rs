use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};

use echobot_core::echo::send_greeting;

use super::{chat_of, HandlerResult};
use crate::router::AppState;

/// Commands the bot understands. Anything else is plain text.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "greet and explain what the bot does")]
    Start,
}

pub async fn handle_start(msg: Message, cmd: Command, state: Arc<AppState>) -> HandlerResult {
    match cmd {
        Command::Start => {
            tracing::debug!(chat_id = msg.chat.id.0, "start command");
            send_greeting(state.messenger.as_ref(), chat_of(&msg)).await?;
        }
    }
    Ok(())
}
