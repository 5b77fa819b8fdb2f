//! Base trait for actions.

/// Marker trait for action values.
///
/// Actions represent:
/// - User input (button presses, key bindings)
/// - Deferred system events (timer completions)
///
/// Actions carry only the data a reducer needs to compute the next state.
pub trait Action: Send + 'static {}
