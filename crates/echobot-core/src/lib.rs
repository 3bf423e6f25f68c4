//! Core logic for the echo bot.
//!
//! This crate is framework-agnostic. Telegram lives behind the messaging port
//! implemented in the adapter crate.

pub mod config;
pub mod domain;
pub mod echo;
pub mod errors;
pub mod logging;
pub mod messaging;

pub use errors::{Error, Result};
