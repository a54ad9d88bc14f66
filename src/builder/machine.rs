//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Context, EventTarget, State};
use crate::machine::{Definition, Machine, MachineConfig, StateNode};
use std::collections::HashMap;

/// Builder for constructing state machines with a fluent API.
pub struct MachineBuilder<S: State, C: Context> {
    context: C,
    initial: Option<S>,
    states: Vec<(S, StateNode<S, C>)>,
    config: MachineConfig,
}

impl<S: State, C: Context> MachineBuilder<S, C> {
    /// Create a new builder carrying the initial context.
    pub fn new(context: C) -> Self {
        Self {
            context,
            initial: None,
            states: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Define a state.
    pub fn state(mut self, state: S, builder: StateBuilder<S, C>) -> Self {
        self.states.push((state, builder.build()));
        self
    }

    /// Trace every engine step at `DEBUG`.
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Bound the number of steps one operation may take.
    pub fn max_chain_depth(mut self, depth: usize) -> Self {
        self.config.max_chain_depth = depth;
        self
    }

    /// Replace the whole runtime configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the state machine.
    ///
    /// Checks that the initial state, every plain event target and every
    /// goto refer to defined states. Targets returned by event handlers are
    /// only known at send time and are checked then.
    pub fn build(self) -> Result<Machine<S, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if self.config.max_chain_depth == 0 {
            return Err(BuildError::InvalidChainDepth);
        }

        let mut states = HashMap::with_capacity(self.states.len());
        for (state, node) in self.states {
            if states.contains_key(&state) {
                return Err(BuildError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
            states.insert(state, node);
        }

        if !states.contains_key(&initial) {
            return Err(BuildError::UndefinedInitialState {
                state: initial.name().to_string(),
            });
        }
        for (state, node) in &states {
            validate_node(state, node, |target| states.contains_key(target))?;
        }

        let definition = Definition::new(states, initial);
        Ok(Machine::new(definition, self.context, self.config))
    }
}

fn validate_node<S, C>(
    state: &S,
    node: &StateNode<S, C>,
    is_defined: impl Fn(&S) -> bool,
) -> Result<(), BuildError>
where
    S: State,
    C: Context,
{
    for (event, target) in &node.on {
        if let EventTarget::State(target) = target {
            if !is_defined(target) {
                return Err(BuildError::UndefinedTarget {
                    state: state.name().to_string(),
                    event: event.clone(),
                    target: target.name().to_string(),
                });
            }
        }
    }
    match &node.goto {
        Some(target) if !is_defined(target) => Err(BuildError::UndefinedGoto {
            state: state.name().to_string(),
            target: target.name().to_string(),
        }),
        _ => Ok(()),
    }
}
