//! Single-shot timer gate.
//!
//! A [`DelayGate`] starts its timer on construction and moves from
//! `Waiting` to `Elapsed` exactly once, unless it is disposed first.
//! Disposal aborts the timer task so no late transition can happen.
//! Dropping a gate disposes it.

mod delayed;

pub use delayed::{with_delay, Delayed};

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Errors raised when building a gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Gate duration must be non-negative, got {millis}ms")]
    InvalidDuration { millis: i64 },
}

/// Lifecycle of a gate. `Elapsed` and `Disposed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Waiting,
    Elapsed,
    Disposed,
}

pub struct DelayGate {
    duration: Duration,
    state: Arc<watch::Sender<GateState>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl DelayGate {
    /// Create a gate and start its timer on the current tokio runtime.
    pub fn new(duration: Duration) -> Self {
        let (state, _) = watch::channel(GateState::Waiting);
        let state = Arc::new(state);

        // The deadline is fixed here, not on the timer task's first poll.
        let deadline = tokio::time::Instant::now() + duration;
        let timer_state = Arc::clone(&state);
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if leave_waiting(&timer_state, GateState::Elapsed) {
                tracing::debug!(duration_ms = duration.as_millis() as u64, "Delay gate elapsed");
            }
        });

        Self {
            duration,
            state,
            timer: Mutex::new(Some(timer)),
        }
    }

    /// Create a gate from a millisecond count, rejecting negative values.
    pub fn from_millis(millis: i64) -> Result<Self, GateError> {
        duration_from_millis(millis).map(Self::new)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    pub fn is_elapsed(&self) -> bool {
        self.state() == GateState::Elapsed
    }

    /// Cancel the timer. Idempotent, and a no-op once the gate has elapsed.
    pub fn dispose(&self) {
        if leave_waiting(&self.state, GateState::Disposed) {
            tracing::debug!("Delay gate disposed before elapsing");
        }
        if let Some(timer) = self.timer.lock().take() {
            timer.abort();
        }
    }

    /// Wait for the gate to settle. Returns `true` if it elapsed and
    /// `false` if it was disposed.
    pub async fn wait(&self) -> bool {
        let mut rx = self.state.subscribe();
        let elapsed = rx
            .wait_for(|state| *state != GateState::Waiting)
            .await
            .map(|state| *state == GateState::Elapsed)
            .unwrap_or(false);
        elapsed
    }

    /// Run `inner` only once the gate has elapsed.
    pub fn render<T>(&self, inner: impl FnOnce() -> T) -> Option<T> {
        self.is_elapsed().then(inner)
    }
}

impl Drop for DelayGate {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for DelayGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelayGate")
            .field("duration", &self.duration)
            .field("state", &self.state())
            .finish()
    }
}

/// Convert a signed millisecond count into a gate duration.
pub fn duration_from_millis(millis: i64) -> Result<Duration, GateError> {
    u64::try_from(millis)
        .map(Duration::from_millis)
        .map_err(|_| GateError::InvalidDuration { millis })
}

/// Move from `Waiting` to `next`. Returns false if the gate already settled.
fn leave_waiting(state: &watch::Sender<GateState>, next: GateState) -> bool {
    state.send_if_modified(|current| {
        if *current == GateState::Waiting {
            *current = next;
            true
        } else {
            false
        }
    })
}
