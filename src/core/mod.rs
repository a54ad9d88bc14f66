//! Core state machine types.
//!
//! This module contains the vocabulary the engine is written in:
//! - State names via the `State` trait
//! - Context values and shallow merging via the `Context` trait
//! - Three-way guards, enter hooks and event handlers

mod context;
mod guard;
mod hooks;
mod state;

pub use context::Context;
pub use guard::{Guard, GuardOutcome};
pub use hooks::{EnterHook, EventHandler, EventTarget, HookError};
pub use state::State;
