//! Single-writer counter store.
//!
//! The store owns [`CounterState`] inside one worker task. Handles submit
//! actions through an unbounded mailbox, so writes are serialized in the
//! order the dispatch calls were made. Published states are observable
//! through a `watch` channel.
//!
//! Delayed increments run as two transitions: `DelayedIncrementBy` marks
//! the state pending right away, and a sleeper task later feeds
//! `DelayedIncrementSettled` back to the worker, which applies the
//! increment and clears the pending slot together. Delayed increments
//! cannot be cancelled; the worker keeps running until every one of them
//! has settled, even after all handles are gone.

mod types;

pub use types::{StoreConfig, DEFAULT_DELAY_MS};

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::mvi::Reducer;
use types::StoreCommand;

/// Capabilities a view needs from a store: read the current state and
/// submit actions.
pub trait StoreAccess {
    /// Latest published state.
    fn snapshot(&self) -> CounterState;

    /// Submit an action. Fire-and-forget.
    fn dispatch(&self, action: CounterAction);
}

impl<T: StoreAccess + ?Sized> StoreAccess for Arc<T> {
    fn snapshot(&self) -> CounterState {
        (**self).snapshot()
    }

    fn dispatch(&self, action: CounterAction) {
        (**self).dispatch(action)
    }
}

pub struct CounterStore {
    mailbox: mpsc::UnboundedReceiver<StoreCommand>,
    settle_tx: mpsc::UnboundedSender<CounterAction>,
    settle_rx: mpsc::UnboundedReceiver<CounterAction>,
    publisher: watch::Sender<CounterState>,
    state: CounterState,
    config: StoreConfig,
}

impl CounterStore {
    /// Create a store and a handle to it. The store does nothing until
    /// [`CounterStore::run`] is polled.
    pub fn new(initial: CounterState, config: StoreConfig) -> (Self, StoreHandle) {
        let (sender, mailbox) = mpsc::unbounded_channel();
        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        let (publisher, state_rx) = watch::channel(initial);

        let store = Self {
            mailbox,
            settle_tx,
            settle_rx,
            publisher,
            state: initial,
            config,
        };
        let handle = StoreHandle { sender, state_rx };
        (store, handle)
    }

    /// Spawn the worker on the current tokio runtime.
    /// The task resolves to the final state once the store stops.
    pub fn spawn(
        initial: CounterState,
        config: StoreConfig,
    ) -> (StoreHandle, JoinHandle<CounterState>) {
        let (store, handle) = Self::new(initial, config);
        let task = tokio::spawn(store.run());
        (handle, task)
    }

    /// Drive the store until every handle is dropped and no delayed
    /// increment is outstanding. Returns the final state.
    pub async fn run(mut self) -> CounterState {
        tracing::info!(
            count = self.state.count(),
            delay_ms = self.config.delay.as_millis() as u64,
            "Counter store started"
        );
        let mut mailbox_open = true;

        loop {
            if !mailbox_open && self.state.in_flight() == 0 {
                break;
            }

            // Mailbox first so a dispatch already queued is never overtaken
            // by a settle that became ready at the same time.
            tokio::select! {
                biased;

                command = self.mailbox.recv(), if mailbox_open => match command {
                    Some(StoreCommand::Dispatch(action)) => self.dispatch(action),
                    Some(StoreCommand::Barrier { respond_to }) => {
                        if respond_to.send(self.state).is_err() {
                            tracing::trace!("Store: barrier response dropped (receiver gone)");
                        }
                    }
                    None => mailbox_open = false,
                },
                Some(settled) = self.settle_rx.recv() => self.apply(settled),
            }
        }

        tracing::info!(count = self.state.count(), "Counter store stopped");
        self.state
    }

    fn dispatch(&mut self, action: CounterAction) {
        match action {
            CounterAction::DelayedIncrementBy { amount } => {
                self.apply(action);
                self.schedule_settle(amount);
            }
            CounterAction::DelayedIncrementSettled { .. } => {
                // Only the store's own sleepers may settle a delayed increment.
                tracing::warn!(action = action.name(), "Ignoring externally dispatched action");
            }
            _ => self.apply(action),
        }
    }

    fn schedule_settle(&self, amount: i64) {
        let deadline = tokio::time::Instant::now() + self.config.delay;
        let settle_tx = self.settle_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if settle_tx
                .send(CounterAction::DelayedIncrementSettled { amount })
                .is_err()
            {
                tracing::trace!("Store: settle dropped (store gone)");
            }
        });
    }

    fn apply(&mut self, action: CounterAction) {
        self.state = CounterReducer::reduce(self.state, action);
        tracing::debug!(
            action = action.name(),
            amount = action.amount(),
            count = self.state.count(),
            pending = self.state.is_pending(),
            "Applied action"
        );
        self.publisher.send_replace(self.state);
    }
}

/// Cloneable entry point into a running [`CounterStore`].
#[derive(Clone)]
pub struct StoreHandle {
    sender: mpsc::UnboundedSender<StoreCommand>,
    state_rx: watch::Receiver<CounterState>,
}

impl StoreHandle {
    pub fn increment_by(&self, amount: i64) {
        self.dispatch(CounterAction::IncrementBy { amount });
    }

    pub fn decrement_by(&self, amount: i64) {
        self.dispatch(CounterAction::DecrementBy { amount });
    }

    /// Mark the store pending now and add `amount` once the configured
    /// delay has elapsed.
    pub fn delayed_increment_by(&self, amount: i64) {
        self.dispatch(CounterAction::DelayedIncrementBy { amount });
    }

    /// State after every action dispatched before this call has been applied.
    ///
    /// Falls back to the last published snapshot if the store has stopped.
    pub async fn state(&self) -> CounterState {
        let (respond_to, response) = oneshot::channel();
        if self.sender.send(StoreCommand::Barrier { respond_to }).is_err() {
            return self.snapshot();
        }
        response.await.unwrap_or_else(|_| self.snapshot())
    }

    /// Observe every state the store publishes.
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.state_rx.clone()
    }

    /// True once the store's worker has stopped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl StoreAccess for StoreHandle {
    fn snapshot(&self) -> CounterState {
        *self.state_rx.borrow()
    }

    fn dispatch(&self, action: CounterAction) {
        if self.sender.send(StoreCommand::Dispatch(action)).is_err() {
            tracing::warn!(action = action.name(), "Store closed, action dropped");
        }
    }
}
