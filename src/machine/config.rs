//! Runtime configuration for a machine.

use serde::{Deserialize, Serialize};

/// Default bound on steps a single `start`/`send` may take.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 1024;

/// Runtime options for a [`Machine`](super::Machine).
///
/// Can be set through the builder or deserialized, e.g. from JSON:
///
/// ```rust
/// use waypoint::machine::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "debug": true }"#).unwrap();
/// assert!(config.debug);
/// assert_eq!(config.max_chain_depth, 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Emit `DEBUG` trace events for every construction, start, send,
    /// transition, guard check, goto and enter. No behavioural effect.
    pub debug: bool,

    /// Upper bound on guard admissions, redirects and gotos within one
    /// operation. Exceeding it fails the operation with
    /// [`MachineError::ChainTooLong`](super::MachineError::ChainTooLong).
    pub max_chain_depth: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            debug: false,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}
