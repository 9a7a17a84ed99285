//! The validated transition table.

use crate::builder::BuildError;
use crate::core::StateKey;
use crate::table::registry::Registry;
use crate::table::transition::Transition;
use crate::table::violations::{self, Check, TableViolation};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use stillwater::validation::Validation;
use tracing::debug;

/// A rule set checked for ambiguity and dangling destinations.
///
/// The registry holds every `from` state in first-occurrence order, followed
/// by explicitly registered terminal states. Index 0 is the initial state.
/// Every (state, event) pair maps to at most one destination.
///
/// # Example
///
/// ```rust
/// use tablefsm::table::{Transition, TransitionTable};
/// use tablefsm::state_enum;
///
/// state_enum! {
///     enum Valve { Closed, Open }
/// }
///
/// let table = TransitionTable::new(
///     vec![
///         Transition::new(Valve::Closed, "open", Valve::Open),
///         Transition::new(Valve::Open, "close", Valve::Closed),
///     ],
///     [],
/// )
/// .unwrap();
///
/// assert_eq!(table.initial(), Valve::Closed);
/// assert!(table.handles(Valve::Closed, "open"));
/// assert!(!table.handles(Valve::Closed, "close"));
/// assert_eq!(table.destination(Valve::Open, "close"), Some(Valve::Closed));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S, K> {
    transitions: Vec<Transition<S, K>>,
    registry: Registry<S>,
    routes: HashMap<(usize, K), usize>,
    initial: S,
}

impl<S, K> TransitionTable<S, K>
where
    S: StateKey,
    K: Copy + Eq + Hash + Debug,
{
    /// Build and validate a table.
    ///
    /// `terminals` registers states with no outgoing rules so they may be
    /// used as destinations. Fails with every violation found.
    pub fn new<I, T>(transitions: I, terminals: T) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Transition<S, K>>,
        T: IntoIterator<Item = S>,
    {
        let (table, checks) = Self::compile(transitions, terminals)?;
        violations::finish(checks)?;
        Ok(table)
    }

    /// Build the table and collect validation checks without judging them.
    pub(crate) fn compile<I, T>(
        transitions: I,
        terminals: T,
    ) -> Result<(Self, Vec<Check>), BuildError>
    where
        I: IntoIterator<Item = Transition<S, K>>,
        T: IntoIterator<Item = S>,
    {
        let declared: Vec<Transition<S, K>> = transitions.into_iter().collect();
        let initial = declared.first().ok_or(BuildError::NoTransitions)?.from;

        let mut registry: Registry<S> = declared.iter().map(|t| t.from).collect();
        for terminal in terminals {
            registry.register(terminal);
        }

        let mut checks: Vec<Check> = Vec::new();
        let mut seen: HashMap<(S, K), S> = HashMap::new();
        let mut conflicts: HashSet<(S, K, S)> = HashSet::new();
        let mut routes = HashMap::new();
        let mut kept = Vec::with_capacity(declared.len());

        for rule in declared {
            match seen.get(&(rule.from, rule.event)) {
                Some(&to) if to == rule.to => {
                    debug!(
                        from = rule.from.name(),
                        event = ?rule.event,
                        to = rule.to.name(),
                        "collapsing duplicate transition"
                    );
                    continue;
                }
                Some(&to) => {
                    if !conflicts.insert((rule.from, rule.event, rule.to)) {
                        continue;
                    }
                    checks.push(Validation::fail(TableViolation::AmbiguousTransition {
                        state: rule.from.name().to_string(),
                        event: format!("{:?}", rule.event),
                        first: to.name().to_string(),
                        second: rule.to.name().to_string(),
                    }));
                    continue;
                }
                None => {
                    seen.insert((rule.from, rule.event), rule.to);
                }
            }

            match (registry.index_of(rule.from), registry.index_of(rule.to)) {
                (Some(from), Some(to)) => {
                    routes.insert((from, rule.event), to);
                }
                _ => checks.push(Validation::fail(TableViolation::UnregisteredDestination {
                    from: rule.from.name().to_string(),
                    event: format!("{:?}", rule.event),
                    to: rule.to.name().to_string(),
                })),
            }
            kept.push(rule);
        }

        debug!(
            states = registry.len(),
            transitions = kept.len(),
            initial = initial.name(),
            "compiled transition table"
        );

        let table = Self {
            transitions: kept,
            registry,
            routes,
            initial,
        };
        Ok((table, checks))
    }

    /// The state entered when a machine starts: registry index 0.
    pub fn initial(&self) -> S {
        self.initial
    }

    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    pub fn index_of(&self, state: S) -> Option<usize> {
        self.registry.index_of(state)
    }

    /// Whether `state` has a rule for `event`.
    pub fn handles(&self, state: S, event: K) -> bool {
        self.index_of(state)
            .is_some_and(|index| self.routes.contains_key(&(index, event)))
    }

    /// The state `event` leads to from `state`, if any rule applies.
    pub fn destination(&self, state: S, event: K) -> Option<S> {
        let index = self.index_of(state)?;
        self.destination_index(index, event)
            .and_then(|to| self.registry.get(to))
    }

    /// Index-level lookup used during dispatch.
    pub(crate) fn destination_index(&self, index: usize, event: K) -> Option<usize> {
        self.routes.get(&(index, event)).copied()
    }

    /// Distinct rules in declaration order.
    pub fn transitions(&self) -> &[Transition<S, K>] {
        &self.transitions
    }

    /// Rules leaving `state`, in declaration order.
    pub fn transitions_from(&self, state: S) -> impl Iterator<Item = &Transition<S, K>> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
