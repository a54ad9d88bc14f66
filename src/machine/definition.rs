//! State definitions and the immutable table a machine runs against.

use crate::core::{Context, EnterHook, EventTarget, Guard, State};
use std::collections::HashMap;

/// Everything declared for one state. All parts are optional.
pub struct StateNode<S: State, C: Context> {
    pub on: HashMap<String, EventTarget<S, C>>,
    pub guard: Option<Guard<S, C>>,
    pub enter: Option<EnterHook<C>>,
    pub goto: Option<S>,
}

impl<S: State, C: Context> StateNode<S, C> {
    pub fn event(&self, event: &str) -> Option<&EventTarget<S, C>> {
        self.on.get(event)
    }
}

impl<S: State, C: Context> Default for StateNode<S, C> {
    fn default() -> Self {
        Self {
            on: HashMap::new(),
            guard: None,
            enter: None,
            goto: None,
        }
    }
}

/// The machine definition: every state node plus the initial state.
///
/// Built and validated by
/// [`MachineBuilder`](crate::builder::MachineBuilder); never mutated after.
pub struct Definition<S: State, C: Context> {
    states: HashMap<S, StateNode<S, C>>,
    initial: S,
}

impl<S: State, C: Context> Definition<S, C> {
    pub(crate) fn new(states: HashMap<S, StateNode<S, C>>, initial: S) -> Self {
        Self { states, initial }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    pub fn node(&self, state: &S) -> Option<&StateNode<S, C>> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
