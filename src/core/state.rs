//! Core State trait for state machine states.
//!
//! A state is a name drawn from the closed set declared in a machine
//! definition. States are used as map keys, so they must hash and compare.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the engine copies state names into its current-state slot
/// - `Eq` + `Hash`: states key the definition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: snapshots of the machine are serializable
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Dynamically named states, for machines assembled from data.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}
