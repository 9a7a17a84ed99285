//! State identity for transition tables.
//!
//! A state key names a state node. It carries no behavior: the behavior bound
//! to a key lives in a [`Lifecycle`](super::Lifecycle) value owned by the
//! machine.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identities.
///
/// Keys are small tags, usually fieldless enums, compared and hashed while
/// the transition table is built. They are copied freely during dispatch.
///
/// # Required Traits
///
/// - `Copy`: keys are stored in the registry and returned from dispatch by value
/// - `Eq` + `Hash`: keys index the registry
/// - `Debug`: keys are debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use tablefsm::core::StateKey;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl StateKey for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
pub trait StateKey: Copy + Eq + Hash + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Connecting,
        Connected,
    }

    impl StateKey for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Connecting => "Connecting",
                Self::Connected => "Connected",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Connecting.name(), "Connecting");
        assert_eq!(TestState::Connected.name(), "Connected");
    }

    #[test]
    fn keys_are_hashable_identities() {
        let keys: HashSet<TestState> = [
            TestState::Idle,
            TestState::Connected,
            TestState::Idle,
            TestState::Connecting,
        ]
        .into_iter()
        .collect();

        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&TestState::Connecting));
    }
}
