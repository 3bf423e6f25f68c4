//! Messenger abstraction (Telegram today).

pub mod port;
