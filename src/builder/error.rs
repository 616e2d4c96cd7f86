//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when assembling a configuration table.
///
/// These cover only local structural mistakes. Cross-table consistency
/// (dangling targets, an initial state with no configuration) is
/// deliberately not checked here; such tables are legal and resolve to
/// no-ops at transition time.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{0}' registered more than once")]
    DuplicateState(String),

    #[error("Event '{event}' registered more than once for state '{state}'")]
    DuplicateTransition { state: String, event: String },
}
