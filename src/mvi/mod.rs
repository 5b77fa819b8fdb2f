//! Model-View-Intent (MVI) primitives.
//!
//! Every state transition in the crate flows through these traits:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, cloned to publish
//! - **Action**: user input or a deferred system event
//! - **Reducer**: pure function producing the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
