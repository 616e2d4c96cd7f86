//! Turnstile: a declarative, table-driven finite state machine core.
//!
//! A machine is driven by an immutable configuration table: every state,
//! the actions to run when it is entered or exited, and the events it
//! accepts mapped to target states and transition actions. The core
//! exposes a single operation, [`Machine::transition`], which resolves
//! the table, fires the exit/transition/enter action sequence, and
//! records the new state.
//!
//! # Core Concepts
//!
//! - **Configuration**: pure data, built once by the caller, never
//!   mutated by the core
//! - **Actions**: synchronous, zero-argument callables supplied by the
//!   caller; all side effects live here
//! - **Silent no-ops**: an unknown state, unknown event, or dangling
//!   target never errors - the call returns the unchanged current state
//!   and runs nothing
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::{MachineConfigBuilder, StateBuilder};
//! use turnstile::core::{Action, Machine};
//!
//! let config = MachineConfigBuilder::new()
//!     .initial("off")
//!     .state(
//!         "off",
//!         StateBuilder::new()
//!             .on_enter(|| println!("lights out"))
//!             .on_with_actions("switch", "on", vec![Action::new(|| println!("flipping"))]),
//!     )
//!     .unwrap()
//!     .state(
//!         "on",
//!         StateBuilder::new()
//!             .on_enter(|| println!("lights on"))
//!             .on("switch", "off"),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let mut machine = Machine::new(config);
//! assert_eq!(machine.current_state(), &"off");
//!
//! let now = machine.transition("off", "switch");
//! assert_eq!(now, "on");
//!
//! // Unknown events are silent no-ops.
//! assert_eq!(machine.transition("on", "dim"), "on");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfigBuilder, StateBuilder};
pub use core::{Action, EventId, Machine, MachineConfig, StateConfig, StateId, Transition};
