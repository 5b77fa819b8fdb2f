//! State held by the counter store.

use crate::mvi::StoreState;

/// Snapshot of the counter.
///
/// `pending` mirrors `in_flight > 0`: it stays set until the last
/// outstanding delayed increment settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    count: i64,
    pending: bool,
    in_flight: u32,
}

impl StoreState for CounterState {}

impl CounterState {
    /// Idle state seeded with `count`.
    pub fn new(count: i64) -> Self {
        Self {
            count,
            pending: false,
            in_flight: 0,
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// True while a delayed increment is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of delayed increments that have not settled yet.
    pub fn in_flight(&self) -> u32 {
        self.in_flight
    }

    pub(crate) fn with_count(self, count: i64) -> Self {
        Self { count, ..self }
    }

    pub(crate) fn with_in_flight(self, in_flight: u32) -> Self {
        Self {
            in_flight,
            pending: in_flight > 0,
            ..self
        }
    }
}
