//! Counter driven through a single-writer store, with delayed
//! increments and a cancellable delay gate.
//!
//! - [`store`]: the actor owning [`counter::CounterState`]
//! - [`gate`]: single-shot timer gate used to hold back spinners
//! - [`ui`]: terminal front end

pub mod cli;
pub mod config;
pub mod counter;
pub mod gate;
pub mod logging;
pub mod mvi;
pub mod shutdown;
pub mod store;
pub mod ui;
