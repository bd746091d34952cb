//! Bot abstraction for webhook registration and echo replies.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};

use crate::error::{BbbotError, Result};
use crate::types::Reply;

/// Abstraction over the messaging platform: register the callback URL, send
/// echo replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Registers `url` with the platform as the webhook callback for updates.
    async fn register_webhook(&self, url: &str) -> Result<()>;
    /// Sends one reply: `reply.text` to `reply.chat_id`, referencing the
    /// source message via `reply.reply_to_message_id`.
    async fn send_reply(&self, reply: &Reply) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

impl TelegramBot {
    /// Wraps an already-built teloxide client (the caller decides token and
    /// API base URL).
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// The underlying teloxide client, for API calls outside the trait
    /// (startup uses `get_me`).
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn register_webhook(&self, url: &str) -> Result<()> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| BbbotError::Webhook(format!("Invalid webhook URL {}: {}", url, e)))?;
        self.bot
            .set_webhook(url)
            .await
            .map_err(|e| BbbotError::Webhook(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, reply: &Reply) -> Result<()> {
        self.bot
            .send_message(ChatId(reply.chat_id), reply.text.clone())
            .reply_parameters(ReplyParameters::new(MessageId(reply.reply_to_message_id)))
            .await
            .map_err(|e| BbbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
