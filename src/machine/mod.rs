//! The transition engine and its runtime surface.
//!
//! # Key Concepts
//!
//! - **Definition**: the immutable table of state nodes plus the initial state
//! - **Machine**: owns the current state and context, exposes `start`/`send`
//! - **Snapshot**: the published pair of current state and context, pushed to
//!   subscribers after every step of an operation
//! - **SharedMachine**: a cloneable handle that serializes whole operations
//!
//! # Transition chains
//!
//! Every `start` or `send` runs one chain. For each target the engine
//! evaluates the target's guard (admit, reject or redirect), makes it current,
//! runs its enter hook, and follows its goto until a state with no goto
//! settles or a guard rejects. A rejection re-runs the current state's enter
//! hook but not its goto. An immediate self-goto is fatal, and longer
//! cycles are cut off by [`MachineConfig::max_chain_depth`].

mod config;
mod definition;
mod engine;
mod error;
mod shared;

pub use config::{MachineConfig, DEFAULT_MAX_CHAIN_DEPTH};
pub use definition::{Definition, StateNode};
pub use engine::{Dispatch, Machine, Snapshot};
pub use error::MachineError;
pub use shared::SharedMachine;
