//! # Tick Timer
//!
//! The scheduler decides *when* the next word is due; a [`TickTimer`] makes
//! that happen. The timer never calls back into the scheduler directly. It
//! hands the [`TickId`] it was given to whoever drives the scheduler (the TUI
//! event loop), which passes it to `Scheduler::tick`.
//!
//! Cancellation is advisory. A tick may already be in flight when `cancel()`
//! runs, so the scheduler checks every incoming id against the one it is
//! waiting for and drops anything else.

use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

/// Generation token for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickId(pub(crate) u64);

impl TickId {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Something that can deliver a tick after a delay.
pub trait TickTimer {
    /// Arrange for `tick` to be delivered after `delay`.
    fn schedule(&mut self, tick: TickId, delay: Duration);

    /// Best-effort cancel of whatever is pending.
    fn cancel(&mut self);
}

/// Tokio-backed timer. Each scheduled tick is a task that sleeps and then
/// sends its id down a channel.
pub struct TokioTimer {
    tx: UnboundedSender<TickId>,
    pending: Option<AbortHandle>,
}

impl TokioTimer {
    pub fn new(tx: UnboundedSender<TickId>) -> Self {
        Self { tx, pending: None }
    }
}

impl TickTimer for TokioTimer {
    /// Must be called from inside a tokio runtime.
    fn schedule(&mut self, tick: TickId, delay: Duration) {
        self.cancel();

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(tick).is_err() {
                warn!(
                    "Failed to deliver tick {}: receiver dropped",
                    tick.generation()
                );
            }
        });
        self.pending = Some(handle.abort_handle());
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Aborting pending timer task");
            handle.abort();
        }
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);
        let started = tokio::time::Instant::now();

        timer.schedule(TickId(1), Duration::from_millis(250));
        let tick = rx.recv().await;

        assert_eq!(tick, Some(TickId(1)));
        assert!(started.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);

        timer.schedule(TickId(1), Duration::from_millis(500));
        timer.schedule(TickId(2), Duration::from_millis(100));

        assert_eq!(rx.recv().await, Some(TickId(2)));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = TokioTimer::new(tx);

        timer.schedule(TickId(7), Duration::from_millis(100));
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(rx.try_recv().is_err());
    }
}
