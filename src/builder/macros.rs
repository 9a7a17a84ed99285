//! Macros for ergonomic machine construction.

/// Generate a state-key enum and its `StateKey` implementation.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`; do not derive
/// them again.
///
/// # Example
///
/// ```
/// use tablefsm::core::StateKey;
/// use tablefsm::state_enum;
///
/// state_enum! {
///     pub enum Session {
///         Idle,
///         Authenticating,
///         Active,
///     }
/// }
///
/// assert_eq!(Session::Authenticating.name(), "Authenticating");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateKey for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a fieldless event enum that is its own kind.
///
/// # Example
///
/// ```
/// use tablefsm::core::Event;
/// use tablefsm::event_enum;
///
/// event_enum! {
///     pub enum Button {
///         Press,
///         Release,
///     }
/// }
///
/// assert_eq!(Button::Press.kind(), Button::Press);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            type Kind = Self;

            fn kind(&self) -> Self {
                *self
            }
        }
    };
}

/// Build a `Vec` of transitions from `(from, event) => to` rules.
///
/// # Example
///
/// ```
/// use tablefsm::table::Transition;
/// use tablefsm::transitions;
///
/// let rules = transitions![
///     ("Idle", 'g') => "Running",
///     ("Running", 's') => "Idle",
/// ];
///
/// assert_eq!(rules[1], Transition::new("Running", 's', "Idle"));
/// ```
#[macro_export]
macro_rules! transitions {
    ($( ($from:expr, $event:expr) => $to:expr ),* $(,)?) => {
        vec![$($crate::table::Transition::new($from, $event, $to)),*]
    };
}
