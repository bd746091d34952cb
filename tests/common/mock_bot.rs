//! Mock implementation of [`bbbot::Bot`] for integration tests.
//!
//! Records every `send_reply` call so tests can assert on reply order and
//! content without hitting Telegram. Replies whose text is in `fail_texts`
//! fail after being recorded, like an API rejection.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use bbbot::{BbbotError, Bot, Reply, Result};

/// Mock Bot that sends each attempted reply to a channel held by the test.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<Reply>,
    fail_texts: HashSet<String>,
}

impl MockBot {
    pub fn new(sent_tx: mpsc::UnboundedSender<Reply>) -> Self {
        Self {
            sent_tx,
            fail_texts: HashSet::new(),
        }
    }

    /// Creates a MockBot and returns the receiver for attempted replies.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Reply>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self::new(sent_tx)), sent_rx)
    }

    /// Like [`MockBot::with_receiver`], but `send_reply` returns an error for
    /// replies with any of the given texts. The attempt is still recorded.
    pub fn failing_on(
        texts: &[&str],
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<Reply>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        let bot = Self {
            sent_tx,
            fail_texts: texts.iter().map(|t| t.to_string()).collect(),
        };
        (Arc::new(bot), sent_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn register_webhook(&self, _url: &str) -> Result<()> {
        Ok(())
    }

    async fn send_reply(&self, reply: &Reply) -> Result<()> {
        let _ = self.sent_tx.send(reply.clone());
        if self.fail_texts.contains(&reply.text) {
            return Err(BbbotError::Bot(format!(
                "mock send failure for {:?}",
                reply.text
            )));
        }
        Ok(())
    }
}
