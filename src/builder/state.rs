//! Builder for a single state's definition.

use crate::core::{Context, EnterHook, EventHandler, EventTarget, Guard, HookError, State};
use crate::machine::StateNode;
use serde_json::Value;
use std::future::Future;

/// Builder for a state node with a fluent API.
///
/// Every part is optional; `StateBuilder::new()` alone defines a plain
/// resting state with no events.
pub struct StateBuilder<S: State, C: Context> {
    node: StateNode<S, C>,
}

impl<S: State, C: Context> StateBuilder<S, C> {
    /// Create a new state builder.
    pub fn new() -> Self {
        Self {
            node: StateNode::default(),
        }
    }

    /// Go to `target` when `event` arrives.
    pub fn on(mut self, event: impl Into<String>, target: S) -> Self {
        self.node.on.insert(event.into(), EventTarget::State(target));
        self
    }

    /// Compute the target when `event` arrives.
    ///
    /// The handler gets the live context and the event payload; edits it
    /// makes to the context are kept.
    pub fn handle<F>(mut self, event: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut C, Option<&Value>) -> S + Send + Sync + 'static,
    {
        self.node
            .on
            .insert(event.into(), EventTarget::Handler(EventHandler::new(handler)));
        self
    }

    /// Add a pre-built guard (optional).
    pub fn guard(mut self, guard: Guard<S, C>) -> Self {
        self.node.guard = Some(guard);
        self
    }

    /// Add a guard using an async closure (optional).
    pub fn when<F, Fut, O>(mut self, predicate: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: Into<crate::core::GuardOutcome<S>> + 'static,
    {
        self.node.guard = Some(Guard::new(predicate));
        self
    }

    /// Run `hook` every time this state becomes current (optional).
    pub fn enter<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<C>, HookError>> + Send + 'static,
    {
        self.node.enter = Some(EnterHook::new(hook));
        self
    }

    /// Forward to `target` as soon as this state has been entered (optional).
    pub fn goto(mut self, target: S) -> Self {
        self.node.goto = Some(target);
        self
    }

    pub(crate) fn build(self) -> StateNode<S, C> {
        self.node
    }
}

impl<S: State, C: Context> Default for StateBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
