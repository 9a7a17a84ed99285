//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Event, Lifecycle, StateKey};
use crate::machine::{Machine, StateAdapter};
use crate::table::{self, Check, TableViolation, Transition, TransitionTable};
use stillwater::validation::Validation;

/// Builder for constructing machines with a fluent API.
///
/// Declares the rule set, binds a [`Lifecycle`] value to every state the
/// table references, and validates everything in [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use tablefsm::builder::MachineBuilder;
/// use tablefsm::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green }
/// }
///
/// event_enum! {
///     enum Tick { Timer }
/// }
///
/// let mut machine = MachineBuilder::<Light, Tick>::new()
///     .transition(Light::Red, Tick::Timer, Light::Green)
///     .transition(Light::Green, Tick::Timer, Light::Red)
///     .state(Light::Red, ())
///     .state(Light::Green, ())
///     .build()
///     .unwrap();
///
/// machine.on(&Tick::Timer);
/// assert_eq!(machine.current(), Light::Green);
/// ```
pub struct MachineBuilder<S, E: Event> {
    transitions: Vec<Transition<S, E::Kind>>,
    terminals: Vec<S>,
    states: Vec<(S, Box<dyn Lifecycle<E>>)>,
    history: usize,
}

impl<S: StateKey, E: Event> MachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            terminals: Vec::new(),
            states: Vec::new(),
            history: 0,
        }
    }

    /// Declare a rule: on `event` while in `from`, move to `to`.
    ///
    /// The first declared `from` state is the initial state.
    pub fn transition(mut self, from: S, event: E::Kind, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E::Kind>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, in order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E::Kind>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Register a state with no outgoing rules so it can be a destination.
    pub fn terminal(mut self, state: S) -> Self {
        self.terminals.push(state);
        self
    }

    /// Bind the behavior of `key`. Every registered state needs exactly one.
    pub fn state<L>(mut self, key: S, value: L) -> Self
    where
        L: Lifecycle<E> + 'static,
    {
        let value: Box<dyn Lifecycle<E>> = Box::new(value);
        self.states.push((key, value));
        self
    }

    /// Keep the `capacity` most recent transitions. `0` disables history.
    pub fn history(mut self, capacity: usize) -> Self {
        self.history = capacity;
        self
    }

    /// Build the machine and enter its initial state.
    ///
    /// Returns every table and binding violation if the rule set is invalid.
    pub fn build(self) -> Result<Machine<S, E>, BuildError> {
        let (table, mut checks) = TransitionTable::compile(self.transitions, self.terminals)?;
        let registry = table.registry();

        let mut slots: Vec<Option<Box<dyn Lifecycle<E>>>> =
            (0..registry.len()).map(|_| None).collect();
        for (key, value) in self.states {
            let slot = match registry.index_of(key) {
                Some(index) => slots.get_mut(index),
                None => None,
            };
            match slot {
                None => checks.push(fail(TableViolation::UnknownState {
                    state: key.name().to_string(),
                })),
                Some(Some(_)) => checks.push(fail(TableViolation::DuplicateState {
                    state: key.name().to_string(),
                })),
                Some(slot) => *slot = Some(value),
            }
        }

        let mut adapters = Vec::with_capacity(slots.len());
        for (key, slot) in registry.iter().zip(slots) {
            match slot {
                Some(value) => adapters.push(StateAdapter::new(key, value)),
                None => checks.push(fail(TableViolation::MissingState {
                    state: key.name().to_string(),
                })),
            }
        }

        table::finish(checks)?;
        Ok(Machine::start(table, adapters, self.history))
    }
}

fn fail(violation: TableViolation) -> Check {
    Validation::fail(violation)
}

impl<S: StateKey, E: Event> Default for MachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
