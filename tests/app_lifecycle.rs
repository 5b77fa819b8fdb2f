//! App behaviour against a live store: loading, key handling, spinners.

mod common;

use std::sync::Arc;

use common::advance_ms;
use common::mock_store::RecordingStore;
use counterflow::counter::{CounterAction, CounterState};
use counterflow::store::{CounterStore, StoreAccess, StoreConfig, DEFAULT_DELAY_MS};
use counterflow::ui::app::App;
use counterflow::ui::counter_view::CounterButton;
use counterflow::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test(start_paused = true)]
async fn presses_ignored_while_loading() {
    let store = Arc::new(RecordingStore::default());
    let mut app = App::new(Arc::clone(&store), 1, 0).unwrap();
    assert!(app.is_loading());
    assert!(!app.press(CounterButton::Increment));
    assert!(store.actions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn loading_spinner_hidden_until_grace_period() {
    let store = Arc::new(RecordingStore::default());
    let app = App::new(store, 1, 150).unwrap();
    assert!(app.loading_spinner().is_none());
    advance_ms(149).await;
    assert!(app.loading_spinner().is_none());
    advance_ms(1).await;
    assert!(app.loading_spinner().is_some());
}

#[tokio::test(start_paused = true)]
async fn negative_spinner_delay_rejected() {
    let store = Arc::new(RecordingStore::default());
    assert!(App::new(store, 1, -1).is_err());
}

#[tokio::test(start_paused = true)]
async fn keys_map_to_actions() {
    let store = Arc::new(RecordingStore::with_state(CounterState::new(1)));
    let mut app = App::new(Arc::clone(&store), 3, 0).unwrap();
    app.finish_loading(store.snapshot());

    handle_key(&mut app, key(KeyCode::Char('+')));
    handle_key(&mut app, key(KeyCode::Char('-')));
    handle_key(&mut app, key(KeyCode::Char('l')));

    assert_eq!(
        store.actions(),
        vec![
            CounterAction::IncrementBy { amount: 3 },
            CounterAction::DecrementBy { amount: 3 },
            CounterAction::DelayedIncrementBy { amount: 3 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn focus_cycles_and_enter_presses_focused() {
    let store = Arc::new(RecordingStore::default());
    let mut app = App::new(Arc::clone(&store), 1, 0).unwrap();
    app.finish_loading(CounterState::new(0));

    assert_eq!(app.focus(), CounterButton::Increment);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), CounterButton::Decrement);
    handle_key(&mut app, key(KeyCode::BackTab));
    handle_key(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus(), CounterButton::DelayedIncrement);

    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(
        store.actions(),
        vec![CounterAction::DelayedIncrementBy { amount: 1 }]
    );
}

#[tokio::test(start_paused = true)]
async fn quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = App::new(Arc::new(RecordingStore::default()), 1, 0).unwrap();
        assert!(!app.should_quit());
        handle_key(&mut app, event);
        assert!(app.should_quit());
    }
}

#[tokio::test(start_paused = true)]
async fn delayed_increment_end_to_end() {
    let (store, _task) = CounterStore::spawn(CounterState::new(1), StoreConfig::default());
    let mut app = App::new(store.clone(), 1, 200).unwrap();
    app.finish_loading(store.state().await);

    assert!(app.press(CounterButton::DelayedIncrement));
    let state = store.state().await;
    app.on_state(state);
    assert_eq!((state.count(), state.is_pending()), (1, true));
    assert!(!app.props().is_enabled(CounterButton::DelayedIncrement));
    assert!(!app.press(CounterButton::DelayedIncrement));

    advance_ms(200).await;
    assert!(app.pending_spinner().is_some());

    advance_ms(DEFAULT_DELAY_MS - 200).await;
    let state = store.state().await;
    app.on_state(state);
    assert_eq!(state, CounterState::new(2));
    assert!(app.pending_spinner().is_none());
    assert!(app.props().is_enabled(CounterButton::DelayedIncrement));
}

#[tokio::test(start_paused = true)]
async fn short_pending_window_never_shows_spinner() {
    let config = StoreConfig {
        delay: std::time::Duration::from_millis(50),
    };
    let (store, _task) = CounterStore::spawn(CounterState::new(0), config);
    let mut app = App::new(store.clone(), 1, 200).unwrap();
    app.finish_loading(store.state().await);

    app.press(CounterButton::DelayedIncrement);
    app.on_state(store.state().await);
    assert!(app.pending_spinner().is_none());

    advance_ms(50).await;
    app.on_state(store.state().await);
    assert!(!app.state().is_pending());

    advance_ms(500).await;
    assert!(app.pending_spinner().is_none());
}
