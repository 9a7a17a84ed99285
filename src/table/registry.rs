//! Dense indexing of the states a table references.

use crate::core::StateKey;
use std::collections::HashMap;
use std::slice;

/// Deduplicated, order-stable set of states.
///
/// Each state gets the index of its first registration, so indices are dense
/// in `[0, len)`. The machine stores its current state as such an index.
#[derive(Clone, Debug)]
pub struct Registry<S> {
    states: Vec<S>,
    indices: HashMap<S, usize>,
}

impl<S: StateKey> Registry<S> {
    pub(crate) fn new() -> Self {
        Self {
            states: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Register `state` if unseen. Returns its index either way.
    pub(crate) fn register(&mut self, state: S) -> usize {
        if let Some(&index) = self.indices.get(&state) {
            return index;
        }
        let index = self.states.len();
        self.states.push(state);
        self.indices.insert(state, index);
        index
    }

    pub fn index_of(&self, state: S) -> Option<usize> {
        self.indices.get(&state).copied()
    }

    pub fn get(&self, index: usize) -> Option<S> {
        self.states.get(index).copied()
    }

    pub fn contains(&self, state: S) -> bool {
        self.indices.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// States in index order.
    pub fn as_slice(&self) -> &[S] {
        &self.states
    }

    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, S>> {
        self.states.iter().copied()
    }
}

impl<S: StateKey> FromIterator<S> for Registry<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for state in iter {
            registry.register(state);
        }
        registry
    }
}
