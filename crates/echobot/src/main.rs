use std::{process::ExitCode, sync::Arc};

use echobot_core::config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), echobot_core::Error> {
    let cfg = Arc::new(Config::load()?);

    echobot_core::logging::init("echobot")?;

    echobot_telegram::router::run_polling(cfg)
        .await
        .map_err(|e| echobot_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
