//! Event dispatch over a validated transition table.
//!
//! The machine keeps one active state index. Each call to `on` either does
//! nothing (no rule for the active state and event kind) or runs the full
//! sequence: handle on the old state, exit the old state, enter the new
//! state, update the index. Construction fires the initial `enter()`.

mod adapter;
mod dispatcher;

pub(crate) use adapter::StateAdapter;
pub use dispatcher::{Dispatch, Machine};
