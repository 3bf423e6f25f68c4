//! What the bot says back.

use crate::{
    domain::{ChatId, MessageRef},
    messaging::port::MessagingPort,
    Result,
};

/// Reply to the start command.
pub const START_GREETING: &str = "Привет! Я эхо-бот. Пришли мне сообщение, и я повторю его.";

/// Return the received text unchanged; absent text becomes an empty string.
pub fn echo_reply(text: Option<&str>) -> String {
    text.unwrap_or_default().to_string()
}

pub async fn send_greeting(messenger: &dyn MessagingPort, chat_id: ChatId) -> Result<MessageRef> {
    messenger.send_text(chat_id, START_GREETING).await
}

pub async fn send_echo(
    messenger: &dyn MessagingPort,
    chat_id: ChatId,
    text: Option<&str>,
) -> Result<MessageRef> {
    messenger.send_text(chat_id, &echo_reply(text)).await
}
