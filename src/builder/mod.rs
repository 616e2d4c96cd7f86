//! Builder API for ergonomic configuration assembly.
//!
//! This module provides fluent builders and macros for declaring
//! configuration tables with minimal boilerplate. Builders validate
//! local structure only; the lazy-consistency rules of the core (see
//! [`MachineConfig`]) are left intact.
//!
//! [`MachineConfig`]: crate::core::MachineConfig

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::MachineConfigBuilder;
pub use state::StateBuilder;

use crate::core::{EventId, MachineConfig, StateId};

/// Declare a two-state table where each state flips to the other on the
/// same event. A convenience for the common toggle shape.
///
/// # Example
///
/// ```
/// use turnstile::builder::toggle_config;
/// use turnstile::core::Machine;
///
/// let config = toggle_config("off", "on", "switch");
/// let mut machine = Machine::new(config);
///
/// assert_eq!(machine.transition("off", "switch"), "on");
/// assert_eq!(machine.transition("on", "switch"), "off");
/// ```
pub fn toggle_config<S, E>(first: S, second: S, event: E) -> MachineConfig<S, E>
where
    S: StateId,
    E: EventId,
{
    MachineConfigBuilder::new()
        .initial(first.clone())
        .state(first.clone(), StateBuilder::new().on(event.clone(), second.clone()))
        .expect("fresh builder has no duplicate states")
        .state(second, StateBuilder::new().on(event, first))
        .expect("fresh builder has no duplicate states")
        .build()
        .expect("toggle table always builds")
}
