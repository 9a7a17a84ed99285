//! Events delivered to a machine.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for events.
///
/// An event is a payload plus a kind. The kind is the event's identity in the
/// transition table; the payload is only seen by the handler of the current
/// state.
///
/// Fieldless enums can use themselves as their kind, see
/// [`event_enum!`](crate::event_enum).
///
/// # Example
///
/// ```rust
/// use tablefsm::core::Event;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum FrameKind {
///     Data,
///     Ack,
/// }
///
/// enum Frame {
///     Data(Vec<u8>),
///     Ack(u16),
/// }
///
/// impl Event for Frame {
///     type Kind = FrameKind;
///
///     fn kind(&self) -> FrameKind {
///         match self {
///             Self::Data(_) => FrameKind::Data,
///             Self::Ack(_) => FrameKind::Ack,
///         }
///     }
/// }
///
/// assert_eq!(Frame::Ack(7).kind(), FrameKind::Ack);
/// ```
pub trait Event {
    /// Identity used for table lookups.
    type Kind: Copy + Eq + Hash + Debug;

    /// Get the kind of this event.
    fn kind(&self) -> Self::Kind;
}
