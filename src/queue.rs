//! Bounded FIFO hand-off between the webhook ingress and the dispatch loop.

use tokio::sync::mpsc;

use crate::types::Update;

/// How many updates may wait between ingress and dispatch before the ingress
/// starts blocking.
pub const UPDATE_QUEUE_CAPACITY: usize = 100;

/// Bounded update queue. Senders are cloned freely for the ingress; the
/// receiver can be taken exactly once, so a second consumer cannot exist.
pub struct UpdateQueue {
    tx: mpsc::Sender<Update>,
    rx: Option<mpsc::Receiver<Update>>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::with_capacity(UPDATE_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self { tx, rx: Some(rx) }
    }

    /// A sender half for the ingress.
    pub fn sender(&self) -> mpsc::Sender<Update> {
        self.tx.clone()
    }

    /// Extract the receiver. The first call gets it; later calls get `None`.
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<Update>> {
        self.rx.take()
    }
}

impl Default for UpdateQueue {
    fn default() -> Self {
        Self::new()
    }
}
