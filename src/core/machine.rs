//! Machine execution: the transition algorithm.

use super::config::MachineConfig;
use super::ident::{EventId, StateId};

/// A mutable cell holding the current state identifier, paired with the
/// immutable configuration table that drives it.
///
/// The recorded state is private and mutated only by [`transition`]; all
/// state changes funnel through the single algorithm below.
///
/// # Example
///
/// ```rust
/// use turnstile::builder::{MachineConfigBuilder, StateBuilder};
/// use turnstile::core::Machine;
///
/// let config = MachineConfigBuilder::new()
///     .initial("off")
///     .state("off", StateBuilder::new().on("switch", "on"))
///     .unwrap()
///     .state("on", StateBuilder::new().on("switch", "off"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut machine = Machine::new(config);
/// assert_eq!(machine.current_state(), &"off");
/// assert_eq!(machine.transition("off", "switch"), "on");
/// ```
///
/// [`transition`]: Machine::transition
pub struct Machine<S: StateId, E: EventId> {
    state: S,
    config: MachineConfig<S, E>,
}

impl<S: StateId, E: EventId> Machine<S, E> {
    /// Create a machine recording the configuration's initial state.
    ///
    /// The initial state is taken verbatim: it is not checked against the
    /// configured state set, and no action runs - in particular the
    /// initial state's `on_enter` is never invoked. A malformed
    /// configuration surfaces only as a no-op on the first transition
    /// attempted through the bad identifier.
    pub fn new(config: MachineConfig<S, E>) -> Self {
        Machine {
            state: config.initial_state.clone(),
            config,
        }
    }

    /// Get the recorded current state.
    pub fn current_state(&self) -> &S {
        &self.state
    }

    /// Get the configuration table this machine reads from.
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }

    /// Fire `event` against `state` and return the resulting state.
    ///
    /// Callers conventionally pass the machine's current state, but the
    /// argument is deliberately decoupled from the recorded state: the
    /// lookups resolve against `state`, and only the final write touches
    /// the machine. This allows driving a transition table from a state
    /// the machine does not currently record.
    ///
    /// Three lookups gate execution, in order: the source state's
    /// configuration, the event's transition within it, and the target
    /// state's configuration. If any is absent the call is a no-op: the
    /// recorded state is returned unchanged and nothing runs, not even
    /// `on_exit`. There is no error type and no panic for invalid input;
    /// silence is the contract.
    ///
    /// When all three resolve, the source's `on_exit` runs first, then
    /// the transition's actions in declared order, then the target's
    /// `on_enter`. The recorded state is written only after `on_enter`
    /// returns, so an action that unwinds leaves the recorded state at
    /// its pre-transition value.
    pub fn transition(&mut self, state: S, event: E) -> S {
        let Some(current) = self.config.states.get(&state) else {
            return self.state.clone();
        };
        let Some(transition) = current.transitions.get(&event) else {
            return self.state.clone();
        };
        let Some(target) = self.config.states.get(&transition.target) else {
            return self.state.clone();
        };

        current.on_exit.call();
        for action in &transition.actions {
            action.call();
        }
        target.on_enter.call();

        self.state = transition.target.clone();
        self.state.clone()
    }
}
