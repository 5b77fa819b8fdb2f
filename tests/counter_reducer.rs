use counterflow::counter::{CounterAction, CounterReducer, CounterState};
use counterflow::mvi::Reducer;

fn pending(count: i64) -> CounterState {
    CounterReducer::reduce(
        CounterState::new(count),
        CounterAction::DelayedIncrementBy { amount: 1 },
    )
}

#[test]
fn increment_adds_amount() {
    let state = CounterReducer::reduce(CounterState::new(1), CounterAction::IncrementBy { amount: 1 });
    assert_eq!(state, CounterState::new(2));
}

#[test]
fn decrement_subtracts_amount() {
    for (start, amount) in [(0, 1), (10, 3), (-4, -6), (7, 0)] {
        let state = CounterReducer::reduce(
            CounterState::new(start),
            CounterAction::DecrementBy { amount },
        );
        assert_eq!(state.count(), start - amount);
        assert!(!state.is_pending());
    }
}

#[test]
fn increment_and_decrement_preserve_pending() {
    let start = pending(5);
    let up = CounterReducer::reduce(start, CounterAction::IncrementBy { amount: 2 });
    assert_eq!(up.count(), 7);
    assert!(up.is_pending());

    let down = CounterReducer::reduce(up, CounterAction::DecrementBy { amount: 3 });
    assert_eq!(down.count(), 4);
    assert!(down.is_pending());
}

#[test]
fn delayed_increment_marks_pending_without_changing_count() {
    let state = pending(1);
    assert_eq!(state.count(), 1);
    assert!(state.is_pending());
    assert_eq!(state.in_flight(), 1);
}

#[test]
fn settle_applies_increment_and_clears_pending() {
    let state = CounterReducer::reduce(pending(1), CounterAction::DelayedIncrementSettled { amount: 1 });
    assert_eq!(state, CounterState::new(2));
}

#[test]
fn pending_stays_set_until_last_settle() {
    let state = CounterReducer::reduce(pending(0), CounterAction::DelayedIncrementBy { amount: 2 });
    assert_eq!(state.in_flight(), 2);

    let state = CounterReducer::reduce(state, CounterAction::DelayedIncrementSettled { amount: 1 });
    assert_eq!(state.count(), 1);
    assert!(state.is_pending());

    let state = CounterReducer::reduce(state, CounterAction::DelayedIncrementSettled { amount: 2 });
    assert_eq!(state.count(), 3);
    assert!(!state.is_pending());
}
