use crate::counter::action::CounterAction;
use crate::counter::state::CounterState;
use crate::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        // Saturating arithmetic keeps every transition total at the i64 bounds.
        match action {
            CounterAction::IncrementBy { amount } => {
                state.with_count(state.count().saturating_add(amount))
            }
            CounterAction::DecrementBy { amount } => {
                state.with_count(state.count().saturating_sub(amount))
            }
            CounterAction::DelayedIncrementBy { .. } => {
                state.with_in_flight(state.in_flight().saturating_add(1))
            }
            CounterAction::DelayedIncrementSettled { amount } => state
                .with_count(state.count().saturating_add(amount))
                .with_in_flight(state.in_flight().saturating_sub(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_keeps_pending_flag() {
        let start = CounterState::new(3).with_in_flight(1);
        let next = CounterReducer::reduce(start, CounterAction::IncrementBy { amount: 4 });
        assert_eq!(next.count(), 7);
        assert!(next.is_pending());
    }

    #[test]
    fn settle_without_outstanding_does_not_underflow() {
        let next = CounterReducer::reduce(
            CounterState::new(0),
            CounterAction::DelayedIncrementSettled { amount: 1 },
        );
        assert_eq!(next.count(), 1);
        assert_eq!(next.in_flight(), 0);
        assert!(!next.is_pending());
    }

    #[test]
    fn arithmetic_saturates() {
        let next = CounterReducer::reduce(
            CounterState::new(i64::MAX),
            CounterAction::IncrementBy { amount: 1 },
        );
        assert_eq!(next.count(), i64::MAX);
        let next = CounterReducer::reduce(
            CounterState::new(i64::MIN),
            CounterAction::DecrementBy { amount: 1 },
        );
        assert_eq!(next.count(), i64::MIN);
    }
}
