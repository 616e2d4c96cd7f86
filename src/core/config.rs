//! Declarative configuration tables.
//!
//! A [`MachineConfig`] is pure data: for every state, the actions to run
//! on entry and exit, and a table mapping events to transitions. The core
//! never mutates a configuration; it only reads it while executing
//! transitions.

use super::ident::{EventId, StateId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A zero-argument, synchronous, side-effecting operation.
///
/// Actions are supplied by the caller and invoked by the core at defined
/// points in the transition sequence (exit, transition, enter). Their
/// effects - logging, I/O, counters - are entirely the caller's concern.
/// Identity and equality of actions are irrelevant; only invocation
/// matters.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Action;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let count = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&count);
/// let action = Action::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// action.call();
/// assert_eq!(count.load(Ordering::SeqCst), 1);
/// ```
#[derive(Clone)]
pub struct Action {
    f: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    /// Create an action from a closure.
    ///
    /// The closure must be thread-safe (`Send + Sync`); the core itself
    /// never moves it across threads, but configurations are shareable.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action { f: Arc::new(f) }
    }

    /// An action that does nothing when invoked.
    pub fn noop() -> Self {
        Action::new(|| {})
    }

    /// Invoke the action.
    pub fn call(&self) {
        (self.f)()
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::noop()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action")
    }
}

/// What happens when a specific event fires from a specific state: the
/// target state and an ordered sequence of actions to run in between the
/// source's exit and the target's entry.
#[derive(Clone, Debug)]
pub struct Transition<S: StateId> {
    /// Identifier of the state this transition leads to. It is not
    /// required to exist in the configuration; a dangling target turns
    /// the transition into a no-op when attempted.
    pub target: S,
    /// Actions invoked in order between `on_exit` and `on_enter`.
    pub actions: Vec<Action>,
}

/// Per-state behavior: entry/exit actions plus the accepted events.
#[derive(Clone, Debug)]
pub struct StateConfig<S: StateId, E: EventId> {
    /// Invoked when this state becomes the current state of a transition.
    pub on_enter: Action,
    /// Invoked when this state stops being the current state.
    pub on_exit: Action,
    /// Events this state accepts, each mapped to its transition.
    pub transitions: HashMap<E, Transition<S>>,
}

/// The full declarative table driving a machine.
///
/// A configuration is never required to be internally consistent:
/// `initial_state` need not appear in `states`, and a transition's target
/// need not either. Consistency is checked lazily, only when a transition
/// through the offending edge is attempted - the bad edge then behaves as
/// a no-op (see [`Machine::transition`]).
///
/// [`Machine::transition`]: crate::core::Machine::transition
#[derive(Clone, Debug)]
pub struct MachineConfig<S: StateId, E: EventId> {
    /// The state a machine starts in, recorded verbatim at construction.
    pub initial_state: S,
    /// Every declared state, keyed by identifier.
    pub states: HashMap<S, StateConfig<S, E>>,
}

impl<S: StateId, E: EventId> MachineConfig<S, E> {
    /// Look up the configuration of a single state, if declared.
    pub fn state_config(&self, state: &S) -> Option<&StateConfig<S, E>> {
        self.states.get(state)
    }
}
