use std::{env, path::Path};

use crate::{errors::Error, Result};

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "TG_TOKEN";

const MISSING_TOKEN: &str =
    "Bot token is not configured. Set TG_TOKEN in the environment or in an .env file.";

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
}

impl Config {
    /// Load from the process environment, falling back to `./.env`.
    ///
    /// Variables already present in the environment are never overridden by
    /// the file.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup(TOKEN_ENV)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if telegram_bot_token.is_empty() {
            return Err(Error::Config(MISSING_TOKEN.to_string()));
        }

        Ok(Self { telegram_bot_token })
    }
}

fn load_dotenv_if_present(path: &Path) {
    for (key, val) in read_dotenv(path) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

/// Parse `path` as a dotenv file, skipping lines that do not parse.
fn read_dotenv(path: &Path) -> Vec<(String, String)> {
    if !path.is_file() {
        return Vec::new();
    }
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            return Vec::new();
        }
    };

    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            tracing::warn!("skipping malformed line in {}: {e}", path.display());
            None
        }
    })
    .collect()
}
