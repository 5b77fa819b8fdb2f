//! Actions accepted by the counter store.

use crate::mvi::Action;

/// Actions that can be dispatched to the counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// Add `amount` to the count.
    IncrementBy {
        /// Amount to add.
        amount: i64,
    },

    /// Subtract `amount` from the count.
    DecrementBy {
        /// Amount to subtract.
        amount: i64,
    },

    /// Start a delayed increment. Marks the state pending; the count is
    /// untouched until the matching [`CounterAction::DelayedIncrementSettled`].
    DelayedIncrementBy {
        /// Amount to add once the delay elapses.
        amount: i64,
    },

    /// A delayed increment finished waiting. Applies the increment and
    /// releases its pending slot in a single transition.
    DelayedIncrementSettled {
        /// Amount carried over from the originating action.
        amount: i64,
    },
}

impl Action for CounterAction {}

impl CounterAction {
    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IncrementBy { .. } => "increment_by",
            Self::DecrementBy { .. } => "decrement_by",
            Self::DelayedIncrementBy { .. } => "delayed_increment_by",
            Self::DelayedIncrementSettled { .. } => "delayed_increment_settled",
        }
    }

    /// Amount carried by the action.
    pub fn amount(&self) -> i64 {
        match *self {
            Self::IncrementBy { amount }
            | Self::DecrementBy { amount }
            | Self::DelayedIncrementBy { amount }
            | Self::DelayedIncrementSettled { amount } => amount,
        }
    }
}
