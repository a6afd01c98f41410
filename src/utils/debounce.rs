use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Collapses rapid successive inputs into a single delivery.
///
/// Each `submit` restarts the settle window; only a value that survives the
/// full window unchallenged is sent on the channel. At most one delivery
/// task is alive at a time.
pub struct Debouncer {
    delay: Duration,
    tx: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer and the receiving end for settled values.
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Debouncer {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Replace any pending delivery with `value`, restarting the window.
    pub fn submit(&mut self, value: String) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may already be gone during teardown
            let _ = tx.send(value);
        }));
    }

    /// Abort the pending delivery, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
