//! Transition history tracking.
//!
//! A bounded, ordered log of the transitions a machine has performed. Only
//! completed transitions are recorded; ignored events never appear.

use super::state::StateKey;
use chrono::{DateTime, Utc};
use std::collections::vec_deque::{self, VecDeque};
use std::time::Duration;

/// Record of a single completed transition.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tablefsm::core::TransitionRecord;
///
/// let record = TransitionRecord {
///     from: "Idle",
///     event: 'g',
///     to: "Running",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "Running");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionRecord<S, K> {
    /// The state being left
    pub from: S,
    /// Kind of the event that triggered the transition
    pub event: K,
    /// The state being entered
    pub to: S,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
}

/// Bounded history of transitions, oldest first.
///
/// Once `capacity` records are held, recording a new one drops the oldest.
#[derive(Clone, Debug)]
pub struct TransitionHistory<S, K> {
    records: VecDeque<TransitionRecord<S, K>>,
    capacity: usize,
}

impl<S: StateKey, K: Copy> TransitionHistory<S, K> {
    /// Create an empty history holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord<S, K>) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Iterate over the held records, oldest first.
    pub fn records(&self) -> vec_deque::Iter<'_, TransitionRecord<S, K>> {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<S, K>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first held record's `from` state, then the `to` state of
    /// each record.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Utc;
    /// use tablefsm::core::{StateKey, TransitionHistory, TransitionRecord};
    ///
    /// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    /// enum Phase { One, Two, Three }
    ///
    /// impl StateKey for Phase {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::One => "One",
    ///             Self::Two => "Two",
    ///             Self::Three => "Three",
    ///         }
    ///     }
    /// }
    ///
    /// let mut history = TransitionHistory::with_capacity(8);
    /// history.record(TransitionRecord { from: Phase::One, event: (), to: Phase::Two, timestamp: Utc::now() });
    /// history.record(TransitionRecord { from: Phase::Two, event: (), to: Phase::Three, timestamp: Utc::now() });
    ///
    /// assert_eq!(history.path(), vec![Phase::One, Phase::Two, Phase::Three]);
    /// ```
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Time between the oldest and newest held record.
    ///
    /// Returns `None` if the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
