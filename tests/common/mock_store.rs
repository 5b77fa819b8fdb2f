use counterflow::counter::{CounterAction, CounterState};
use counterflow::store::StoreAccess;
use parking_lot::Mutex;

/// Store double that records dispatched actions instead of applying them.
#[derive(Default)]
pub struct RecordingStore {
    state: Mutex<CounterState>,
    actions: Mutex<Vec<CounterAction>>,
}

impl RecordingStore {
    pub fn with_state(state: CounterState) -> Self {
        Self {
            state: Mutex::new(state),
            actions: Mutex::new(Vec::new()),
        }
    }

    pub fn actions(&self) -> Vec<CounterAction> {
        self.actions.lock().clone()
    }

    pub fn set_state(&self, state: CounterState) {
        *self.state.lock() = state;
    }
}

impl StoreAccess for RecordingStore {
    fn snapshot(&self) -> CounterState {
        *self.state.lock()
    }

    fn dispatch(&self, action: CounterAction) {
        self.actions.lock().push(action);
    }
}
