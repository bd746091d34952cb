//! Error types for the bot.

use thiserror::Error;

/// Top-level error for bbbot (config, bot transport, webhook registration, IO).
#[derive(Error, Debug)]
pub enum BbbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Telegram Bot API error: {0}")]
    Bot(String),

    #[error("Webhook error: {0}")]
    Webhook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bot operations; uses [`BbbotError`].
pub type Result<T> = std::result::Result<T, BbbotError>;
