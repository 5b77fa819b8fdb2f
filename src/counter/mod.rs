//! Counter domain: state, actions and the reducer tying them together.

mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::CounterReducer;
pub use state::CounterState;
