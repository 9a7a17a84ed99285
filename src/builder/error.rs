//! Build errors for transition tables and machines.

use crate::table::TableViolation;
use thiserror::Error;

/// Errors that can occur when building a table or machine.
///
/// A failed build never produces a machine and never calls `enter()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition table rejected with {} violation(s)", .violations.len())]
    InvalidTable { violations: Vec<TableViolation> },
}

impl BuildError {
    /// Violations behind this error; empty for `NoTransitions`.
    pub fn violations(&self) -> &[TableViolation] {
        match self {
            Self::NoTransitions => &[],
            Self::InvalidTable { violations } => violations,
        }
    }
}
