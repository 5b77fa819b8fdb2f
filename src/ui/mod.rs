//! Terminal front end for the counter store.

pub mod app;
pub mod counter_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod spinner;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
