use std::time::Duration;

use crate::counter::CounterState;
use crate::gate::{duration_from_millis, with_delay, Delayed, GateError};
use crate::store::StoreAccess;
use crate::ui::counter_view::{self, CounterButton, CounterProps};
use crate::ui::spinner::Spinner;

/// UI state for the counter screen.
///
/// Spinners are mounted behind a delay gate so short waits never flash
/// one. The loading spinner lives until the store's first state arrives;
/// the pending spinner is mounted when a delayed increment starts and
/// dropped (disposing its gate) once pending clears.
pub struct App<S> {
    store: S,
    state: CounterState,
    increment_amount: i64,
    spinner_delay: Duration,
    focus: CounterButton,
    loading: Option<Delayed<Spinner>>,
    pending_spinner: Option<Delayed<Spinner>>,
    should_quit: bool,
}

impl<S: StoreAccess> App<S> {
    /// Must be called inside a tokio runtime: it starts the loading gate.
    pub fn new(store: S, increment_amount: i64, spinner_delay_ms: i64) -> Result<Self, GateError> {
        let spinner_delay = duration_from_millis(spinner_delay_ms)?;
        let state = store.snapshot();
        Ok(Self {
            store,
            state,
            increment_amount,
            spinner_delay,
            focus: CounterButton::Increment,
            loading: Some(with_delay(spinner_delay, Spinner::new())),
            pending_spinner: None,
            should_quit: false,
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// The counter view is ready to be shown with `state`.
    pub fn finish_loading(&mut self, state: CounterState) {
        if self.loading.take().is_some() {
            tracing::debug!(count = state.count(), "Counter view loaded");
        }
        self.on_state(state);
    }

    pub fn on_state(&mut self, state: CounterState) {
        self.state = state;
        if state.is_pending() {
            if self.pending_spinner.is_none() {
                self.pending_spinner = Some(with_delay(self.spinner_delay, Spinner::new()));
            }
        } else {
            self.pending_spinner = None;
        }
    }

    pub fn on_tick(&mut self) {
        for delayed in [&mut self.loading, &mut self.pending_spinner]
            .into_iter()
            .flatten()
        {
            if let Some(spinner) = delayed.get_mut() {
                spinner.advance();
            }
        }
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn props(&self) -> CounterProps {
        CounterProps::from_state(&self.state, self.increment_amount)
    }

    /// Loading spinner, once its grace period has passed.
    pub fn loading_spinner(&self) -> Option<&Spinner> {
        self.loading.as_ref().and_then(Delayed::get)
    }

    /// Pending spinner, once its grace period has passed.
    pub fn pending_spinner(&self) -> Option<&Spinner> {
        self.pending_spinner.as_ref().and_then(Delayed::get)
    }

    pub fn focus(&self) -> CounterButton {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Press `button`. Ignored while loading or when the button is disabled.
    pub fn press(&mut self, button: CounterButton) -> bool {
        if self.is_loading() {
            return false;
        }
        self.focus = button;
        counter_view::press(&self.store, &self.props(), button)
    }

    pub fn press_focused(&mut self) -> bool {
        self.press(self.focus)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
