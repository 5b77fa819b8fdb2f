use std::time::Duration;

use tokio::sync::oneshot;

use crate::counter::{CounterAction, CounterState};

/// Delay applied to delayed increments unless configured otherwise.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Runtime settings for a [`CounterStore`](super::CounterStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long a delayed increment stays pending before it settles.
    pub delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

pub(crate) enum StoreCommand {
    Dispatch(CounterAction),
    /// Replies once every command queued before it has been applied.
    Barrier {
        respond_to: oneshot::Sender<CounterState>,
    },
}
