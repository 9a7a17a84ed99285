//! Builder API for machine construction.
//!
//! This module provides the fluent [`MachineBuilder`], the [`BuildError`]
//! returned when a rule set is rejected, and macros for declaring state keys,
//! events and rule lists with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
