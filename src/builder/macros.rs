//! Macros for declaring identifier enums.

/// Generate a state identifier enum and its `StateId` implementation.
///
/// The generated enum derives `Clone`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `serde::Serialize` and `serde::Deserialize`; `name()`
/// returns the variant name.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum LampState {
///         Off,
///         On,
///     }
/// }
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an event identifier enum and its `EventId` implementation.
///
/// Same shape as [`state_enum!`]: derives plus a `name()` returning the
/// variant name.
///
/// # Example
///
/// ```
/// use turnstile::event_enum;
///
/// event_enum! {
///     pub enum LampEvent {
///         Switch,
///     }
/// }
/// ```
///
/// [`state_enum!`]: crate::state_enum
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::EventId for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EventId, StateId};

    state_enum! {
        enum TestState {
            Off,
            On,
        }
    }

    event_enum! {
        enum TestEvent {
            Switch,
            Reset,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Off.name(), "Off");
        assert_eq!(TestState::On.name(), "On");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Switch.name(), "Switch");
        assert_eq!(TestEvent::Reset.name(), "Reset");
    }

    #[test]
    fn generated_enums_are_hashable_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(TestEvent::Switch, 1);
        map.insert(TestEvent::Reset, 2);

        assert_eq!(map[&TestEvent::Switch], 1);
        assert_eq!(map[&TestEvent::Reset], 2);
    }

    #[test]
    fn generated_enums_serialize_correctly() {
        let state = TestState::On;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn macros_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }
}
