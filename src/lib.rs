//! Tablefsm: a table-driven finite state machine
//!
//! A machine is declared as a fixed list of `(state, event) => state` rules.
//! The rules are validated once at construction: no (state, event) pair may
//! lead to two destinations, and every destination must be a registered
//! state. After that, dispatch is a single table lookup per event with a
//! guaranteed hook order.
//!
//! # Core Concepts
//!
//! - **State keys**: small tags identifying states via the `StateKey` trait
//! - **Events**: payloads with a `Copy` kind via the `Event` trait
//! - **Lifecycle**: optional `enter`, `exit` and `handle` behavior per state
//! - **Transition table**: the validated rule set and its state registry
//! - **Machine**: the dispatcher holding the active state
//!
//! # Example
//!
//! ```rust
//! use tablefsm::builder::MachineBuilder;
//! use tablefsm::core::Lifecycle;
//! use tablefsm::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Conn {
//!         Idle,
//!         Open,
//!     }
//! }
//!
//! event_enum! {
//!     enum Cmd {
//!         Connect,
//!         Close,
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Counted {
//!     opened: u32,
//! }
//!
//! impl Lifecycle<Cmd> for Counted {
//!     fn enter(&mut self) {
//!         self.opened += 1;
//!     }
//! }
//!
//! let mut machine = MachineBuilder::<Conn, Cmd>::new()
//!     .transition(Conn::Idle, Cmd::Connect, Conn::Open)
//!     .transition(Conn::Open, Cmd::Close, Conn::Idle)
//!     .state(Conn::Idle, ())
//!     .state(Conn::Open, Counted::default())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(machine.current(), Conn::Idle);
//! machine.on(&Cmd::Close); // no rule from Idle: ignored
//! machine.on(&Cmd::Connect);
//! assert_eq!(machine.current(), Conn::Open);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{Event, Hooks, Lifecycle, StateKey};
pub use machine::{Dispatch, Machine};
pub use table::{TableViolation, Transition, TransitionTable};
