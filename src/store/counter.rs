//! Process-wide tap counter.
//!
//! The counter lives in a `watch` channel: every increment is a single
//! read-modify-write under the channel lock, and every subscriber sees the
//! change on its next poll.

use tokio::sync::watch;

/// Shared click counter. Cloning yields another handle to the same value.
#[derive(Clone, Debug)]
pub struct CounterStore {
    tx: watch::Sender<u64>,
}

impl CounterStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Current number of taps.
    pub fn click_count(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Add one tap and notify every subscriber.
    ///
    /// Saturates at `u64::MAX` so the count never goes backwards.
    pub fn increment_click(&self) {
        self.tx.send_modify(|count| *count = count.saturating_add(1));
    }

    pub fn subscribe(&self) -> CounterSubscription {
        CounterSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A view's window onto the counter.
#[derive(Debug)]
pub struct CounterSubscription {
    rx: watch::Receiver<u64>,
}

impl CounterSubscription {
    pub fn current(&self) -> u64 {
        *self.rx.borrow()
    }

    /// True if the counter moved since the last `mark_seen`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Acknowledge the current value and return it.
    pub fn mark_seen(&mut self) -> u64 {
        *self.rx.borrow_and_update()
    }

    /// Wait for the next increment.
    pub async fn changed(&mut self) -> u64 {
        // The store keeps the sender alive as long as any handle exists; if
        // every handle is gone the last value is final.
        let _ = self.rx.changed().await;
        *self.rx.borrow_and_update()
    }
}
