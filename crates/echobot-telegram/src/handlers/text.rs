use std::sync::Arc;

use teloxide::prelude::*;

use echobot_core::echo::send_echo;

use super::{chat_of, HandlerResult};
use crate::router::AppState;

/// Routing predicate for the echo branch: only messages carrying text.
pub fn has_text(msg: Message) -> bool {
    msg.text().is_some()
}

pub async fn handle_echo(msg: Message, state: Arc<AppState>) -> HandlerResult {
    tracing::debug!(chat_id = msg.chat.id.0, "echo");
    send_echo(state.messenger.as_ref(), chat_of(&msg), msg.text()).await?;
    Ok(())
}
