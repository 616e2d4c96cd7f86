//! Builder for per-state configuration.

use crate::core::{Action, EventId, StateId, Transition};

/// Builder for a single state's behavior: entry/exit actions and the
/// events it accepts.
///
/// Entry and exit actions default to no-ops. Transitions are recorded in
/// registration order; duplicate events for the same state surface as a
/// [`BuildError::DuplicateTransition`] when the enclosing
/// [`MachineConfigBuilder`] builds.
///
/// [`BuildError::DuplicateTransition`]: crate::builder::BuildError::DuplicateTransition
/// [`MachineConfigBuilder`]: crate::builder::MachineConfigBuilder
pub struct StateBuilder<S: StateId, E: EventId> {
    pub(crate) on_enter: Action,
    pub(crate) on_exit: Action,
    pub(crate) transitions: Vec<(E, Transition<S>)>,
}

impl<S: StateId, E: EventId> StateBuilder<S, E> {
    /// Create a builder with no-op entry/exit actions and no transitions.
    pub fn new() -> Self {
        Self {
            on_enter: Action::noop(),
            on_exit: Action::noop(),
            transitions: Vec::new(),
        }
    }

    /// Set the action run when this state is entered.
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_enter = Action::new(f);
        self
    }

    /// Set the action run when this state is exited.
    pub fn on_exit<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_exit = Action::new(f);
        self
    }

    /// Accept `event`, targeting `target`, with no transition actions.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.transitions.push((
            event,
            Transition {
                target,
                actions: Vec::new(),
            },
        ));
        self
    }

    /// Accept `event`, targeting `target`, running `actions` in order
    /// between the source's exit and the target's entry.
    pub fn on_with_actions<A>(mut self, event: E, target: S, actions: A) -> Self
    where
        A: IntoIterator<Item = Action>,
    {
        self.transitions.push((
            event,
            Transition {
                target,
                actions: actions.into_iter().collect(),
            },
        ));
        self
    }
}

impl<S: StateId, E: EventId> Default for StateBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn defaults_are_noops_with_no_transitions() {
        let builder = StateBuilder::<&'static str, &'static str>::new();

        builder.on_enter.call();
        builder.on_exit.call();
        assert!(builder.transitions.is_empty());
    }

    #[test]
    fn transitions_are_kept_in_registration_order() {
        let builder = StateBuilder::<&'static str, &'static str>::new()
            .on("first", "a")
            .on("second", "b")
            .on("third", "c");

        let events: Vec<_> = builder.transitions.iter().map(|(e, _)| *e).collect();
        assert_eq!(events, vec!["first", "second", "third"]);
    }

    #[test]
    fn on_with_actions_stores_the_sequence() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let builder = StateBuilder::<&'static str, &'static str>::new().on_with_actions(
            "go",
            "b",
            vec![Action::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })],
        );

        let (_, transition) = &builder.transitions[0];
        assert_eq!(transition.target, "b");
        assert_eq!(transition.actions.len(), 1);
        transition.actions[0].call();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
