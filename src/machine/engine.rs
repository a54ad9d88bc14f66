//! The transition engine.

use crate::core::{Context, EnterHook, GuardOutcome, State};
use crate::machine::config::MachineConfig;
use crate::machine::definition::Definition;
use crate::machine::error::MachineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::watch;
use uuid::Uuid;

/// Emit a `DEBUG` event tagged with the machine id, current state and
/// context, but only when the machine was built with `debug` on.
macro_rules! trace_debug {
    ($machine:expr, $($arg:tt)+) => {
        if $machine.config.debug {
            tracing::debug!(
                machine = %$machine.id,
                current = $machine.current_name(),
                context = ?$machine.context,
                $($arg)+
            );
        }
    };
}

/// The published pair of current state and context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<S, C> {
    /// `None` until the machine has been started and admitted a state.
    pub state: Option<S>,
    pub context: C,
}

/// Whether `send` found a handler for the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The event was declared by the current state and its transition ran.
    Handled,

    /// The current state does not declare the event; nothing changed.
    Unhandled,
}

/// A flat, single-active-state machine carrying a context value.
///
/// `start` and `send` take `&mut self`, so one machine never runs two
/// transitions at once. Wrap it in a
/// [`SharedMachine`](super::SharedMachine) to drive it from several tasks.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::{MachineBuilder, StateBuilder};
/// use serde_json::json;
///
/// # futures::executor::block_on(async {
/// let mut machine = MachineBuilder::new(json!({ "count": 0 }))
///     .initial("idle".to_string())
///     .state("idle".to_string(), StateBuilder::new().on("CLICK", "loading".to_string()))
///     .state("loading".to_string(), StateBuilder::new().on("LOADED", "idle".to_string()))
///     .build()
///     .unwrap();
///
/// machine.start(None).await.unwrap();
/// machine.send("CLICK", None, None).await.unwrap();
/// assert_eq!(machine.current_state().map(String::as_str), Some("loading"));
/// # });
/// ```
pub struct Machine<S: State, C: Context> {
    id: Uuid,
    definition: Definition<S, C>,
    current: Option<S>,
    context: C,
    config: MachineConfig,
    published: watch::Sender<Snapshot<S, C>>,
}

impl<S: State, C: Context> Machine<S, C> {
    pub(crate) fn new(definition: Definition<S, C>, context: C, config: MachineConfig) -> Self {
        let (published, _) = watch::channel(Snapshot {
            state: None,
            context: context.clone(),
        });
        let machine = Self {
            id: Uuid::new_v4(),
            definition,
            current: None,
            context,
            config,
            published,
        };
        trace_debug!(
            machine,
            initial = machine.definition.initial().name(),
            states = machine.definition.len(),
            "created"
        );
        machine
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn initial_state(&self) -> &S {
        self.definition.initial()
    }

    /// The active state, or `None` before `start` has admitted one.
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn snapshot(&self) -> Snapshot<S, C> {
        Snapshot {
            state: self.current.clone(),
            context: self.context.clone(),
        }
    }

    /// Observe the snapshot, republished after every step of `start`/`send`.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S, C>> {
        self.published.subscribe()
    }

    /// Merge `patch` into the context and transition into the initial state.
    ///
    /// The initial state is subject to its own guard, enter hook and goto
    /// like any other target. Resolves once the chain settles.
    pub async fn start(&mut self, patch: Option<C::Patch>) -> Result<(), MachineError> {
        let initial = self.definition.initial().clone();
        trace_debug!(self, initial = initial.name(), "start");

        self.transition(initial, patch).await
    }

    /// Dispatch `event` against the current state's `on` table.
    ///
    /// A handler runs synchronously with the live context and `data`; any
    /// edits it makes are kept. `patch` is merged before the transition
    /// runs. An event the current state does not declare is logged and
    /// reported as [`Dispatch::Unhandled`], leaving everything unchanged.
    pub async fn send(
        &mut self,
        event: &str,
        data: Option<Value>,
        patch: Option<C::Patch>,
    ) -> Result<Dispatch, MachineError> {
        trace_debug!(self, event, data = ?data, "send");

        let target = self
            .current
            .as_ref()
            .and_then(|state| self.definition.node(state))
            .and_then(|node| node.event(event))
            .cloned();
        let Some(target) = target else {
            tracing::warn!(
                machine = %self.id,
                event,
                state = self.current_name(),
                "event not handled in current state"
            );
            return Ok(Dispatch::Unhandled);
        };

        let candidate = target.resolve(&mut self.context, data.as_ref());
        self.transition(candidate, patch).await?;
        Ok(Dispatch::Handled)
    }

    /// Drive the machine from `target` until it settles.
    ///
    /// Each step checks the target's guard, makes it current, runs its enter
    /// hook, then follows its goto. A guard rejection ends the chain with the
    /// previous state still current; that state's enter hook runs again but
    /// its goto is not followed.
    ///
    /// Every write to the current state or context is published before the
    /// next await, so dropping the future mid-chain leaves subscribers in
    /// step with [`snapshot`](Self::snapshot).
    async fn transition(&mut self, target: S, patch: Option<C::Patch>) -> Result<(), MachineError> {
        if let Some(patch) = patch {
            self.context.merge(patch);
        }
        self.publish();

        let mut target = target;
        let mut steps = 0;
        loop {
            steps += 1;
            if steps > self.config.max_chain_depth {
                return Err(MachineError::ChainTooLong {
                    limit: self.config.max_chain_depth,
                    state: target.name().to_string(),
                });
            }

            let Some(node) = self.definition.node(&target) else {
                return Err(MachineError::UnknownState {
                    state: target.name().to_string(),
                });
            };
            let guard = node.guard.clone();
            let enter = node.enter.clone();
            let goto = node.goto.clone();
            trace_debug!(self, to = target.name(), "transition");

            if let Some(guard) = guard {
                trace_debug!(self, state = target.name(), "guard");
                match guard.check(&self.context).await {
                    GuardOutcome::Admit => {}
                    GuardOutcome::Reject => {
                        trace_debug!(self, state = target.name(), "guard rejected");
                        self.reenter_current().await;
                        return Ok(());
                    }
                    GuardOutcome::RedirectTo(redirect) => {
                        if !self.definition.contains(&redirect) {
                            return Err(MachineError::UnknownRedirect {
                                target: redirect.name().to_string(),
                                guard_state: target.name().to_string(),
                            });
                        }
                        trace_debug!(
                            self,
                            from = target.name(),
                            to = redirect.name(),
                            "guard redirect"
                        );
                        target = redirect;
                        continue;
                    }
                }
            }

            self.current = Some(target.clone());
            self.publish();
            if let Some(enter) = enter {
                self.enter(&target, &enter).await;
            }

            let Some(next) = goto else {
                return Ok(());
            };
            if next == target {
                return Err(MachineError::GotoLoop {
                    state: target.name().to_string(),
                });
            }
            trace_debug!(self, to = next.name(), "goto");
            target = next;
        }
    }

    /// Run the enter hook of the state that stayed current after a rejection.
    /// Does nothing before the machine has been started.
    async fn reenter_current(&mut self) {
        let Some(current) = self.current.clone() else {
            return;
        };
        let enter = self
            .definition
            .node(&current)
            .and_then(|node| node.enter.clone());
        if let Some(enter) = enter {
            self.enter(&current, &enter).await;
        }
    }

    async fn enter(&mut self, state: &S, hook: &EnterHook<C>) {
        trace_debug!(self, state = state.name(), "enter");
        let outcome = hook.run(&self.context).await;
        match outcome {
            Ok(Some(context)) => {
                self.context = context;
                self.publish();
                trace_debug!(self, state = state.name(), "entered, context replaced");
            }
            Ok(None) => trace_debug!(self, state = state.name(), "entered"),
            Err(error) => tracing::error!(
                machine = %self.id,
                state = state.name(),
                error = %error,
                "enter hook failed"
            ),
        }
    }

    fn current_name(&self) -> &str {
        self.current.as_ref().map(State::name).unwrap_or("")
    }

    fn publish(&self) {
        self.published.send_replace(self.snapshot());
    }
}
