//! Build errors for machine and state builders.

use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state '{state}' has no definition. Add it with .state()")]
    UndefinedInitialState { state: String },

    #[error("State '{state}' is defined more than once")]
    DuplicateState { state: String },

    #[error("Event '{event}' in state '{state}' targets undefined state '{target}'")]
    UndefinedTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("State '{state}' has a goto to undefined state '{target}'")]
    UndefinedGoto { state: String, target: String },

    #[error("max_chain_depth must be at least 1")]
    InvalidChainDepth,
}
