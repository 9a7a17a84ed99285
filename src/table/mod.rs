//! Transition table construction and validation.
//!
//! A rule set is compiled once into a registry of states with dense indices
//! and a lookup from (state index, event kind) to destination index. All
//! validation happens here, before any event is processed, and reports every
//! violation rather than stopping at the first.

mod registry;
mod rules;
mod transition;
mod violations;

pub use registry::Registry;
pub use rules::TransitionTable;
pub use transition::Transition;
pub use violations::TableViolation;

pub(crate) use violations::{finish, Check};
