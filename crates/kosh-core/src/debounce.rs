use std::time::Duration;

use tokio::time::{Instant, sleep_until};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing pushed yet, or the pending value was cancelled
    Idle,
    /// Timer armed
    Pending,
    /// Last value was handed out
    Settled,
}

/// Re-armable delay: only the latest value pushed before the timer fires
/// is released, once.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    state: DebounceState,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            state: DebounceState::Idle,
        }
    }

    /// Replace the pending value and restart the timer
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
        self.state = DebounceState::Pending;
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) -> Option<T> {
        self.state = DebounceState::Idle;
        self.pending.take().map(|(value, _)| value)
    }

    /// Resolves with the pending value once its timer fires; never resolves while idle.
    ///
    /// Cancel safe: dropping the future leaves the pending value in place,
    /// so it can be polled again from a `select!` loop.
    pub async fn settled(&mut self) -> T {
        let Some(deadline) = self.pending.as_ref().map(|(_, deadline)| *deadline) else {
            return std::future::pending().await;
        };

        sleep_until(deadline).await;

        match self.pending.take() {
            Some((value, _)) => {
                self.state = DebounceState::Settled;
                value
            }
            None => std::future::pending().await,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
