//! Lifecycle surface of a state value.
//!
//! Every method has a no-op default, so a state implements only the subset of
//! `enter`, `exit` and `handle` it cares about. A missing handler means the
//! event carries no business logic for that state; whether the event moves the
//! machine is decided by the transition table alone.

/// Behavior bound to a state key.
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Lifecycle;
///
/// struct Counter {
///     entered: u32,
/// }
///
/// impl Lifecycle<u8> for Counter {
///     fn enter(&mut self) {
///         self.entered += 1;
///     }
/// }
///
/// let mut counter = Counter { entered: 0 };
/// counter.enter();
/// counter.exit();
/// counter.handle(&3);
/// assert_eq!(counter.entered, 1);
/// ```
pub trait Lifecycle<E> {
    /// Called when the state becomes active.
    fn enter(&mut self) {}

    /// Called when the state stops being active.
    fn exit(&mut self) {}

    /// Called with the event that triggers a transition out of this state,
    /// before [`exit`](Lifecycle::exit).
    fn handle(&mut self, _event: &E) {}
}

/// A state with no behavior.
impl<E> Lifecycle<E> for () {}

type Hook = Box<dyn FnMut()>;
type EventHook<E> = Box<dyn FnMut(&E)>;

/// Closure-based state behavior.
///
/// Each hook is optional; absent hooks are no-ops.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tablefsm::core::{Hooks, Lifecycle};
///
/// let entered = Rc::new(Cell::new(0));
/// let seen = Rc::clone(&entered);
///
/// let mut hooks: Hooks<u8> = Hooks::new().on_enter(move || seen.set(seen.get() + 1));
/// hooks.enter();
/// hooks.handle(&1);
///
/// assert_eq!(entered.get(), 1);
/// ```
pub struct Hooks<E> {
    on_enter: Option<Hook>,
    on_exit: Option<Hook>,
    on_event: Option<EventHook<E>>,
}

impl<E> Hooks<E> {
    /// Create hooks with nothing attached.
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_exit: None,
            on_event: None,
        }
    }

    /// Attach the enter hook.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attach the exit hook.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Attach the event handler.
    pub fn on_event<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&E) + 'static,
    {
        self.on_event = Some(Box::new(hook));
        self
    }
}

impl<E> Default for Hooks<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Lifecycle<E> for Hooks<E> {
    fn enter(&mut self) {
        if let Some(hook) = self.on_enter.as_mut() {
            hook();
        }
    }

    fn exit(&mut self) {
        if let Some(hook) = self.on_exit.as_mut() {
            hook();
        }
    }

    fn handle(&mut self, event: &E) {
        if let Some(hook) = self.on_event.as_mut() {
            hook(event);
        }
    }
}
