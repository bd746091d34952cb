//! Core data types: the inbound update and the echo reply derived from it.

use serde::{Deserialize, Serialize};

/// One inbound text message, extracted from a Telegram update at the ingress.
///
/// Only new messages that carry text become `Update`s; edits, media without
/// text and other update kinds are dropped before this type is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Chat the message came from; replies go back here.
    pub chat_id: i64,
    /// Message id within the chat; the reply references it.
    pub message_id: i32,
    /// Message text, echoed verbatim.
    pub text: String,
}

/// Outbound echo reply: same chat, same text, replying to the source message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub chat_id: i64,
    pub reply_to_message_id: i32,
    pub text: String,
}

impl Reply {
    /// Builds the echo reply for an update: text copied verbatim, addressed
    /// to the update's chat, replying to the update's message.
    pub fn echo(update: &Update) -> Self {
        Self {
            chat_id: update.chat_id,
            reply_to_message_id: update.message_id,
            text: update.text.clone(),
        }
    }
}
