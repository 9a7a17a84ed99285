//! Uniform lifecycle wrapper around a bound state value.

use crate::core::{Lifecycle, StateKey};
use std::fmt;
use tracing::trace;

/// A state key paired with the behavior bound to it.
pub(crate) struct StateAdapter<S, E> {
    key: S,
    value: Box<dyn Lifecycle<E>>,
}

impl<S: StateKey, E> StateAdapter<S, E> {
    pub(crate) fn new(key: S, value: Box<dyn Lifecycle<E>>) -> Self {
        Self { key, value }
    }

    pub(crate) fn key(&self) -> S {
        self.key
    }

    pub(crate) fn enter(&mut self) {
        trace!(state = self.key.name(), "enter");
        self.value.enter();
    }

    pub(crate) fn exit(&mut self) {
        trace!(state = self.key.name(), "exit");
        self.value.exit();
    }

    pub(crate) fn handle(&mut self, event: &E) {
        trace!(state = self.key.name(), "handle");
        self.value.handle(event);
    }
}

impl<S: fmt::Debug, E> fmt::Debug for StateAdapter<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;
    use std::cell::RefCell;
    use std::rc::Rc;

    state_enum! {
        enum TestState {
            Only,
        }
    }

    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Lifecycle<u16> for Recorder {
        fn exit(&mut self) {
            self.log.borrow_mut().push("exit".to_string());
        }

        fn handle(&mut self, event: &u16) {
            self.log.borrow_mut().push(format!("handle {event}"));
        }
    }

    #[test]
    fn adapter_forwards_to_bound_value() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut adapter: StateAdapter<TestState, u16> = StateAdapter::new(
            TestState::Only,
            Box::new(Recorder {
                log: Rc::clone(&log),
            }),
        );

        adapter.enter();
        adapter.handle(&9);
        adapter.exit();

        assert_eq!(adapter.key(), TestState::Only);
        assert_eq!(*log.borrow(), vec!["handle 9", "exit"]);
    }

    #[test]
    fn debug_shows_key_only() {
        let adapter: StateAdapter<TestState, u16> = StateAdapter::new(TestState::Only, Box::new(()));
        assert_eq!(format!("{adapter:?}"), "StateAdapter { key: Only, .. }");
    }
}
