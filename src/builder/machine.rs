//! Builder for complete configuration tables.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{EventId, MachineConfig, StateConfig, StateId};
use std::collections::HashMap;

/// Builder for assembling a [`MachineConfig`] with a fluent API.
///
/// Only local structure is validated: a missing initial state, a state
/// registered twice, or an event registered twice within one state. The
/// builder does not cross-check the table - transitions may target
/// undeclared states and the initial state may have no configuration;
/// both resolve to no-ops at transition time, exactly as if the table
/// had been assembled by hand.
pub struct MachineConfigBuilder<S: StateId, E: EventId> {
    initial: Option<S>,
    states: Vec<(S, StateBuilder<S, E>)>,
}

impl<S: StateId, E: EventId> MachineConfigBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register a state and its behavior.
    /// Returns an error if the state was already registered.
    pub fn state(mut self, id: S, builder: StateBuilder<S, E>) -> Result<Self, BuildError> {
        if self.states.iter().any(|(existing, _)| *existing == id) {
            return Err(BuildError::DuplicateState(id.name().to_string()));
        }
        self.states.push((id, builder));
        Ok(self)
    }

    /// Build the configuration table.
    /// Returns an error if required fields are missing or an event was
    /// registered twice within one state.
    pub fn build(self) -> Result<MachineConfig<S, E>, BuildError> {
        let initial_state = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut states = HashMap::with_capacity(self.states.len());
        for (id, builder) in self.states {
            let mut transitions = HashMap::with_capacity(builder.transitions.len());
            for (event, transition) in builder.transitions {
                if transitions.contains_key(&event) {
                    return Err(BuildError::DuplicateTransition {
                        state: id.name().to_string(),
                        event: event.name().to_string(),
                    });
                }
                transitions.insert(event, transition);
            }
            states.insert(
                id,
                StateConfig {
                    on_enter: builder.on_enter,
                    on_exit: builder.on_exit,
                    transitions,
                },
            );
        }

        Ok(MachineConfig {
            initial_state,
            states,
        })
    }
}

impl<S: StateId, E: EventId> Default for MachineConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
