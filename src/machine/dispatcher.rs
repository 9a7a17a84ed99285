//! Machine that routes events to its active state.

use crate::core::{Event, StateKey, TransitionHistory, TransitionRecord};
use crate::machine::adapter::StateAdapter;
use crate::table::{Registry, TransitionTable};
use chrono::Utc;
use std::fmt;
use tracing::{debug, trace};

/// Result of dispatching one event.
///
/// An ignored event is expected behavior, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dispatch<S> {
    /// The active state has no rule for the event; nothing ran
    Ignored { state: S },

    /// The machine left `from` and entered `to`
    Transitioned { from: S, to: S },
}

impl<S: Copy> Dispatch<S> {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// The active state after the dispatch.
    pub fn state(&self) -> S {
        match *self {
            Self::Ignored { state } => state,
            Self::Transitioned { to, .. } => to,
        }
    }
}

/// A running state machine.
///
/// Built by [`MachineBuilder`](crate::builder::MachineBuilder), which enters
/// the initial state before returning. The machine owns every state value
/// for its whole lifetime.
pub struct Machine<S: StateKey, E: Event> {
    table: TransitionTable<S, E::Kind>,
    states: Vec<StateAdapter<S, E>>,
    current: usize,
    history: Option<TransitionHistory<S, E::Kind>>,
}

impl<S: StateKey, E: Event> Machine<S, E> {
    /// Assemble a machine from a validated table and one adapter per
    /// registered state, in registry order, then enter state 0.
    pub(crate) fn start(
        table: TransitionTable<S, E::Kind>,
        states: Vec<StateAdapter<S, E>>,
        history: usize,
    ) -> Self {
        let mut machine = Self {
            table,
            states,
            current: 0,
            history: (history > 0).then(|| TransitionHistory::with_capacity(history)),
        };
        debug!(state = machine.current().name(), "entering initial state");
        machine.states[0].enter();
        machine
    }

    /// Deliver `event` to the active state.
    ///
    /// If the table has no rule for the active state and the event's kind,
    /// nothing happens. Otherwise the active state handles the event, exits,
    /// the destination enters, and becomes active, in that order.
    ///
    /// Dispatch is not re-entrant. `&mut self` rules out a nested `on` from a
    /// hook; a machine shared through `Rc<RefCell<_>>` and called back from a
    /// hook fails with the `RefCell` borrow panic instead of interleaving.
    pub fn on(&mut self, event: &E) -> Dispatch<S> {
        let kind = event.kind();
        let from = self.current;

        let Some(to) = self.table.destination_index(from, kind) else {
            trace!(state = self.current().name(), event = ?kind, "ignoring event");
            return Dispatch::Ignored {
                state: self.current(),
            };
        };

        self.states[from].handle(event);
        self.states[from].exit();
        self.states[to].enter();
        self.current = to;

        let (from, to) = (self.states[from].key(), self.states[to].key());
        debug!(
            from = from.name(),
            event = ?kind,
            to = to.name(),
            "transitioned"
        );

        if let Some(history) = self.history.as_mut() {
            history.record(TransitionRecord {
                from,
                event: kind,
                to,
                timestamp: Utc::now(),
            });
        }

        Dispatch::Transitioned { from, to }
    }

    /// Whether `on(event)` would transition from the active state.
    pub fn handles(&self, event: &E) -> bool {
        self.table
            .destination_index(self.current, event.kind())
            .is_some()
    }

    /// Get the active state.
    pub fn current(&self) -> S {
        self.states[self.current].key()
    }

    /// Registry index of the active state.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn table(&self) -> &TransitionTable<S, E::Kind> {
        &self.table
    }

    pub fn registry(&self) -> &Registry<S> {
        self.table.registry()
    }

    /// Transition history, if enabled on the builder.
    pub fn history(&self) -> Option<&TransitionHistory<S, E::Kind>> {
        self.history.as_ref()
    }
}

impl<S: StateKey, E: Event> fmt::Debug for Machine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current())
            .field("states", &self.states)
            .field("transitions", &self.table.transitions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::core::Lifecycle;
    use crate::{event_enum, state_enum};
    use std::cell::RefCell;
    use std::rc::Rc;

    state_enum! {
        enum Door {
            Closed,
            Open,
            Locked,
        }
    }

    event_enum! {
        enum Action {
            Push,
            Pull,
            Lock,
            Unlock,
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    struct Traced {
        name: &'static str,
        log: Log,
    }

    impl Lifecycle<Action> for Traced {
        fn enter(&mut self) {
            self.log.borrow_mut().push(format!("{}.enter", self.name));
        }

        fn exit(&mut self) {
            self.log.borrow_mut().push(format!("{}.exit", self.name));
        }

        fn handle(&mut self, event: &Action) {
            self.log
                .borrow_mut()
                .push(format!("{}.handle({event:?})", self.name));
        }
    }

    fn door(log: &Log, history: usize) -> Machine<Door, Action> {
        let traced = |name| Traced {
            name,
            log: Rc::clone(log),
        };
        MachineBuilder::new()
            .transition(Door::Closed, Action::Pull, Door::Open)
            .transition(Door::Open, Action::Push, Door::Closed)
            .transition(Door::Closed, Action::Lock, Door::Locked)
            .transition(Door::Locked, Action::Unlock, Door::Closed)
            .state(Door::Closed, traced("Closed"))
            .state(Door::Open, traced("Open"))
            .state(Door::Locked, traced("Locked"))
            .history(history)
            .build()
            .unwrap()
    }

    #[test]
    fn construction_enters_initial_state_once() {
        let log = Log::default();
        let machine = door(&log, 0);

        assert_eq!(machine.current(), Door::Closed);
        assert_eq!(machine.current_index(), 0);
        assert_eq!(*log.borrow(), vec!["Closed.enter"]);
    }

    #[test]
    fn transition_runs_handle_exit_enter_in_order() {
        let log = Log::default();
        let mut machine = door(&log, 0);
        log.borrow_mut().clear();

        let outcome = machine.on(&Action::Pull);

        assert_eq!(
            outcome,
            Dispatch::Transitioned {
                from: Door::Closed,
                to: Door::Open
            }
        );
        assert_eq!(machine.current(), Door::Open);
        assert_eq!(
            *log.borrow(),
            vec!["Closed.handle(Pull)", "Closed.exit", "Open.enter"]
        );
    }

    #[test]
    fn unhandled_event_is_ignored_silently() {
        let log = Log::default();
        let mut machine = door(&log, 4);
        log.borrow_mut().clear();

        for _ in 0..3 {
            assert_eq!(
                machine.on(&Action::Unlock),
                Dispatch::Ignored {
                    state: Door::Closed
                }
            );
        }

        assert_eq!(machine.current(), Door::Closed);
        assert!(log.borrow().is_empty());
        assert!(machine.history().is_some_and(|h| h.is_empty()));
    }

    #[test]
    fn handles_reflects_active_state() {
        let log = Log::default();
        let mut machine = door(&log, 0);

        assert!(machine.handles(&Action::Lock));
        assert!(!machine.handles(&Action::Push));

        machine.on(&Action::Lock);
        assert!(machine.handles(&Action::Unlock));
        assert!(!machine.handles(&Action::Lock));
    }

    #[test]
    fn history_records_completed_transitions() {
        let log = Log::default();
        let mut machine = door(&log, 2);

        machine.on(&Action::Pull);
        machine.on(&Action::Lock);
        machine.on(&Action::Push);
        machine.on(&Action::Lock);

        let history = machine.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.path(), vec![Door::Open, Door::Closed, Door::Locked]);
        assert_eq!(history.last().map(|r| r.event), Some(Action::Lock));
    }

    #[test]
    fn dispatch_reports_resulting_state() {
        let moved = Dispatch::Transitioned {
            from: Door::Closed,
            to: Door::Locked,
        };
        let ignored = Dispatch::Ignored { state: Door::Open };

        assert!(moved.is_transition());
        assert_eq!(moved.state(), Door::Locked);
        assert!(!ignored.is_transition());
        assert_eq!(ignored.state(), Door::Open);
    }

    #[test]
    fn debug_lists_current_state() {
        let log = Log::default();
        let machine = door(&log, 0);
        assert!(format!("{machine:?}").contains("current: Closed"));
    }
}
