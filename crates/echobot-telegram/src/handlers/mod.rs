//! Telegram update handlers.
//!
//! Each handler is a thin adapter that pulls the chat id and text out of the
//! teloxide `Message` and calls into `echobot-core` for the reply.

mod commands;
mod text;

pub use commands::{handle_start, Command};
pub use text::{handle_echo, has_text};

/// Endpoint result; send failures surface to the dispatcher's error handler.
pub type HandlerResult = Result<(), echobot_core::Error>;

fn chat_of(msg: &teloxide::types::Message) -> echobot_core::domain::ChatId {
    echobot_core::domain::ChatId(msg.chat.id.0)
}
