//! Core state machine types and logic.
//!
//! This module contains the data model and the transition algorithm:
//! - Identifier traits for states and events
//! - Declarative configuration tables (`MachineConfig` and friends)
//! - The `Machine` cell and its single `transition` operation
//!
//! Configurations are pure data; all side effects live in the
//! caller-supplied actions the machine invokes.

mod config;
mod ident;
mod machine;

pub use config::{Action, MachineConfig, StateConfig, Transition};
pub use ident::{EventId, StateId};
pub use machine::Machine;
