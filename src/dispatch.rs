//! Dispatch loop: drains the update queue and echoes each update back.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::bot::Bot;
use crate::types::{Reply, Update};

/// Consumes queued updates strictly in order and sends one echo reply per
/// update. A failed send is logged and skipped; the next update is not
/// affected. Returns when every sender is gone and the queue is drained.
pub async fn run_dispatch_loop(mut rx: mpsc::Receiver<Update>, bot: Arc<dyn Bot>) {
    while let Some(update) = rx.recv().await {
        info!(
            chat_id = update.chat_id,
            message_id = update.message_id,
            "Processing update"
        );
        let reply = Reply::echo(&update);
        if let Err(e) = bot.send_reply(&reply).await {
            error!(
                error = %e,
                chat_id = update.chat_id,
                message_id = update.message_id,
                "Failed to send echo reply"
            );
        }
    }
    info!("Update queue closed, dispatch loop finished");
}
