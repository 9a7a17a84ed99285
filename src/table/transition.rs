//! Declared transition rules.

/// One rule of a transition table: on `event` while in `from`, move to `to`.
///
/// # Example
///
/// ```rust
/// use tablefsm::table::Transition;
///
/// let rule = Transition::new("Idle", 'g', "Running");
/// assert_eq!(Transition::from(("Idle", 'g', "Running")), rule);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition<S, K> {
    /// State the rule applies in
    pub from: S,
    /// Event kind that triggers the rule
    pub event: K,
    /// State entered when the rule fires
    pub to: S,
}

impl<S, K> Transition<S, K> {
    pub fn new(from: S, event: K, to: S) -> Self {
        Self { from, event, to }
    }

    /// Whether this rule leaves and re-enters the same state.
    pub fn is_self_loop(&self) -> bool
    where
        S: PartialEq,
    {
        self.from == self.to
    }
}

impl<S, K> From<(S, K, S)> for Transition<S, K> {
    fn from((from, event, to): (S, K, S)) -> Self {
        Self::new(from, event, to)
    }
}
