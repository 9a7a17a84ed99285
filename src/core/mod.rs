//! Core vocabulary of the engine.
//!
//! This module contains the types a caller implements or observes:
//! - State identities via the `StateKey` trait
//! - Events and their kinds via the `Event` trait
//! - State behavior via the `Lifecycle` trait or closure `Hooks`
//! - Bounded transition history

mod event;
mod history;
mod lifecycle;
mod state;

pub use event::Event;
pub use history::{TransitionHistory, TransitionRecord};
pub use lifecycle::{Hooks, Lifecycle};
pub use state::StateKey;
