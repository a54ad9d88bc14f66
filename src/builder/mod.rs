//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring machines
//! with minimal boilerplate while keeping state names and contexts typed.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
