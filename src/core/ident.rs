//! Identifier traits for states and events.
//!
//! A configuration table is keyed twice: states by [`StateId`], and each
//! state's transitions by [`EventId`]. Both are opaque comparable keys -
//! the core never inspects them beyond hashing and equality.

use std::fmt::Debug;
use std::hash::Hash;

/// Key naming a state within a configuration table.
///
/// Identifiers are opaque to the core: they only need to be hashable,
/// comparable, and cloneable. Use an enum (see the [`state_enum!`] macro)
/// when the state set is known statically, or `String` when it is built
/// at runtime.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl StateId for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
/// ```
///
/// [`state_enum!`]: crate::state_enum
pub trait StateId: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the identifier's name for display/diagnostics.
    fn name(&self) -> &str;
}

/// Key naming an event within a state's transition table.
///
/// The same event identifier may appear under several states and mean a
/// different transition in each; uniqueness is only required within one
/// state's table.
pub trait EventId: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the identifier's name for display/diagnostics.
    fn name(&self) -> &str;
}

impl StateId for String {
    fn name(&self) -> &str {
        self
    }
}

impl EventId for String {
    fn name(&self) -> &str {
        self
    }
}

impl StateId for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl EventId for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Busy,
    }

    impl StateId for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
            }
        }
    }

    #[test]
    fn enum_state_id_names() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn string_identifiers_name_themselves() {
        let state = String::from("draft");
        assert_eq!(StateId::name(&state), "draft");

        let event = String::from("submit");
        assert_eq!(EventId::name(&event), "submit");
    }

    #[test]
    fn static_str_identifiers_name_themselves() {
        assert_eq!(StateId::name(&"off"), "off");
        assert_eq!(EventId::name(&"switch"), "switch");
    }
}
