//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
///
/// Every variant indicates a malformed table, which is a programmer error
/// in the code declaring the machine, not a property of run-time input.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states declared. Add at least one state before .build()")]
    NoStates,

    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Start state {state} is not in the declared state set")]
    UnknownStartState { state: String },

    #[error("Transition on {symbol} leaves undeclared state {state}")]
    UnknownSourceState { state: String, symbol: String },

    #[error("Transition on {symbol} targets undeclared state {state}")]
    UnknownTargetState { state: String, symbol: String },

    #[error("Duplicate transition for ({state}, {symbol})")]
    DuplicateTransition { state: String, symbol: String },
}
