//! Runtime errors raised by `start`/`send`.

use thiserror::Error;

/// Fatal faults for a single operation.
///
/// Recoverable faults (an event the current state doesn't handle, a failing
/// enter hook) never surface here; they are logged instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State '{target}' returned from guard in '{guard_state}' does not exist")]
    UnknownRedirect { target: String, guard_state: String },

    #[error("State '{state}' is not defined in this machine")]
    UnknownState { state: String },

    #[error("Goto loop detected: '{state}' forwards to itself")]
    GotoLoop { state: String },

    #[error("Transition chain exceeded {limit} steps at '{state}'")]
    ChainTooLong { limit: usize, state: String },
}
