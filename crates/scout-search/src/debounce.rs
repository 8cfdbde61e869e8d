//! Cancellable deferred-task primitive.
//!
//! Text input triggers one recomputation per quiet period rather than one
//! per keystroke: each new schedule cancels the pending one, so at most one
//! message is in flight at a time.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Schedules a single deferred message, cancelling on reschedule.
///
/// After the quiet period elapses the message is sent once on the channel
/// given at construction. Dropping the debouncer cancels any pending send.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration, tx: mpsc::Sender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedule `message` to fire after the quiet period, replacing any
    /// pending schedule.
    pub fn schedule(&mut self, message: T) {
        self.cancel();
        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session is shutting down.
            if tx.send(message).await.is_err() {
                tracing::debug!("debounce fired after session closed");
            }
        }));
    }

    /// Cancel the pending schedule, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
