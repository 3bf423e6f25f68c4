use std::sync::Arc;

use teloxide::{
    dispatching::{Dispatcher, UpdateHandler},
    dptree,
    prelude::*,
    utils::command::BotCommands,
};

use echobot_core::{config::Config, messaging::port::MessagingPort};

use crate::handlers::{self, Command};
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub messenger: Arc<dyn MessagingPort>,
}

/// Dispatch tree, evaluated in registration order: start command, then any text.
pub fn schema() -> UpdateHandler<echobot_core::Error> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handlers::handle_start),
        )
        .branch(dptree::filter(handlers::has_text).endpoint(handlers::handle_echo))
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    match bot.get_me().await {
        Ok(me) => tracing::info!("echobot started: @{}", me.username()),
        Err(e) => tracing::warn!("get_me failed: {e}"),
    }
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("failed to register bot commands: {e}");
    }

    let state = Arc::new(AppState {
        messenger: Arc::new(TelegramMessenger::new(bot.clone())),
    });

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            tracing::trace!(update_id = upd.id, "unhandled update");
        })
        .build()
        .dispatch()
        .await;

    Ok(())
}
