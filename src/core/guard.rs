//! Guard predicates for controlling state transitions.
//!
//! A guard belongs to a target state and runs whenever that state is about to
//! become current. Unlike a plain boolean predicate it has three outcomes: it
//! can admit the transition, reject it, or redirect it to another state.

use super::context::Context;
use super::state::State;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;

/// Result of evaluating a guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome<S: State> {
    /// Let the pending transition proceed.
    Admit,

    /// Stay in the previous state.
    Reject,

    /// Transition to this state instead, subject to its own guard.
    RedirectTo(S),
}

impl<S: State> From<bool> for GuardOutcome<S> {
    fn from(admit: bool) -> Self {
        if admit {
            Self::Admit
        } else {
            Self::Reject
        }
    }
}

impl<S: State> From<Option<S>> for GuardOutcome<S> {
    fn from(redirect: Option<S>) -> Self {
        match redirect {
            Some(state) => Self::RedirectTo(state),
            None => Self::Reject,
        }
    }
}

type GuardFn<S, C> = dyn Fn(C) -> BoxFuture<'static, GuardOutcome<S>> + Send + Sync;

/// Async predicate deciding whether and where a pending transition proceeds.
///
/// The guard receives its own clone of the context, so its future is
/// `'static` and may be held across other awaits.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Guard, GuardOutcome};
/// use serde_json::{json, Value};
///
/// let only_when_ready: Guard<String, Value> =
///     Guard::new(|ctx: Value| async move { ctx["ready"] == json!(true) });
///
/// let outcome = futures::executor::block_on(only_when_ready.check(&json!({ "ready": true })));
/// assert_eq!(outcome, GuardOutcome::Admit);
/// ```
pub struct Guard<S: State, C: Context> {
    predicate: Arc<GuardFn<S, C>>,
}

impl<S: State, C: Context> Guard<S, C> {
    /// Create a guard from an async function.
    ///
    /// The function may resolve to a `bool`, an `Option<S>` or a
    /// [`GuardOutcome`].
    pub fn new<F, Fut, O>(predicate: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: Into<GuardOutcome<S>> + 'static,
    {
        Guard {
            predicate: Arc::new(move |ctx: C| -> BoxFuture<'static, GuardOutcome<S>> {
                predicate(ctx).map(O::into).boxed()
            }),
        }
    }

    /// Create a guard from a synchronous predicate over the context.
    pub fn from_fn<F, O>(predicate: F) -> Self
    where
        F: Fn(&C) -> O + Send + Sync + 'static,
        O: Into<GuardOutcome<S>>,
    {
        Guard {
            predicate: Arc::new(move |ctx: C| -> BoxFuture<'static, GuardOutcome<S>> {
                let outcome = predicate(&ctx).into();
                futures::future::ready(outcome).boxed()
            }),
        }
    }

    /// Evaluate the guard against the current context.
    pub async fn check(&self, ctx: &C) -> GuardOutcome<S> {
        (self.predicate)(ctx.clone()).await
    }
}

impl<S: State, C: Context> Clone for Guard<S, C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
