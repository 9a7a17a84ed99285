//! Reasons a transition table is rejected.

use crate::builder::BuildError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::warn;

/// A single problem found while validating a rule set.
///
/// Names are captured as strings so the violation outlives the key types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("State '{state}' has conflicting transitions on {event}: to '{first}' and to '{second}'")]
    AmbiguousTransition {
        state: String,
        event: String,
        first: String,
        second: String,
    },

    #[error("Transition '{from}' on {event} targets '{to}', which is not a registered state")]
    UnregisteredDestination {
        from: String,
        event: String,
        to: String,
    },

    #[error("No value bound to registered state '{state}'")]
    MissingState { state: String },

    #[error("Value bound to state '{state}', which the table never references")]
    UnknownState { state: String },

    #[error("More than one value bound to state '{state}'")]
    DuplicateState { state: String },
}

/// Outcome of one validation check.
pub(crate) type Check = Validation<(), NonEmptyVec<TableViolation>>;

/// Accumulate every check; fail with all violations if any check failed.
pub(crate) fn finish(checks: Vec<Check>) -> Result<(), BuildError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => {
            for violation in errors.iter() {
                warn!(%violation, "rejecting transition table");
            }
            Err(BuildError::InvalidTable {
                violations: errors.iter().cloned().collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_succeeds_without_failures() {
        let checks: Vec<Check> = vec![Validation::success(()), Validation::success(())];
        assert!(finish(checks).is_ok());
        assert!(finish(Vec::new()).is_ok());
    }

    #[test]
    fn finish_accumulates_all_violations() {
        let checks = vec![
            Validation::fail(TableViolation::MissingState {
                state: "Idle".to_string(),
            }),
            Validation::success(()),
            Validation::fail(TableViolation::UnknownState {
                state: "Ghost".to_string(),
            }),
        ];

        match finish(checks) {
            Err(BuildError::InvalidTable { violations }) => {
                assert_eq!(
                    violations,
                    vec![
                        TableViolation::MissingState {
                            state: "Idle".to_string()
                        },
                        TableViolation::UnknownState {
                            state: "Ghost".to_string()
                        },
                    ]
                );
            }
            other => panic!("Expected InvalidTable, got {other:?}"),
        }
    }

    #[test]
    fn violation_messages_name_the_states() {
        let violation = TableViolation::AmbiguousTransition {
            state: "Idle".to_string(),
            event: "Start".to_string(),
            first: "Running".to_string(),
            second: "Paused".to_string(),
        };

        let message = violation.to_string();
        assert!(message.contains("Idle"));
        assert!(message.contains("Running"));
        assert!(message.contains("Paused"));
    }
}
