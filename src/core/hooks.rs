//! Entry hooks and event handlers.

use super::context::Context;
use super::state::State;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Error raised by an enter hook. Enter failures are recoverable: the engine
/// logs them and carries on with the context it already had.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

type EnterFn<C> = dyn Fn(C) -> BoxFuture<'static, Result<Option<C>, HookError>> + Send + Sync;

/// Async hook run every time its state becomes current.
///
/// Resolving to `Ok(Some(ctx))` replaces the machine's context wholesale;
/// `Ok(None)` leaves it as it was.
pub struct EnterHook<C: Context> {
    hook: Arc<EnterFn<C>>,
}

impl<C: Context> EnterHook<C> {
    pub fn new<F, Fut>(hook: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<C>, HookError>> + Send + 'static,
    {
        EnterHook {
            hook: Arc::new(
                move |ctx: C| -> BoxFuture<'static, Result<Option<C>, HookError>> {
                    hook(ctx).boxed()
                },
            ),
        }
    }

    /// Run the hook against a copy of the current context.
    pub async fn run(&self, ctx: &C) -> Result<Option<C>, HookError> {
        (self.hook)(ctx.clone()).await
    }
}

impl<C: Context> Clone for EnterHook<C> {
    fn clone(&self) -> Self {
        Self {
            hook: Arc::clone(&self.hook),
        }
    }
}

type HandlerFn<S, C> = dyn Fn(&mut C, Option<&Value>) -> S + Send + Sync;

/// Synchronous event handler.
///
/// It receives the live context and the event payload, may edit the context
/// in place, and returns the candidate target state.
pub struct EventHandler<S: State, C: Context> {
    handler: Arc<HandlerFn<S, C>>,
}

impl<S: State, C: Context> EventHandler<S, C> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut C, Option<&Value>) -> S + Send + Sync + 'static,
    {
        EventHandler {
            handler: Arc::new(handler),
        }
    }

    pub fn call(&self, ctx: &mut C, data: Option<&Value>) -> S {
        (self.handler)(ctx, data)
    }
}

impl<S: State, C: Context> Clone for EventHandler<S, C> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

/// What an event resolves to in a state's `on` table.
pub enum EventTarget<S: State, C: Context> {
    /// Go to a fixed state.
    State(S),

    /// Compute the target (and optionally edit the context) at send time.
    Handler(EventHandler<S, C>),
}

impl<S: State, C: Context> EventTarget<S, C> {
    /// Resolve the candidate next state.
    pub fn resolve(&self, ctx: &mut C, data: Option<&Value>) -> S {
        match self {
            Self::State(state) => state.clone(),
            Self::Handler(handler) => handler.call(ctx, data),
        }
    }
}

impl<S: State, C: Context> Clone for EventTarget<S, C> {
    fn clone(&self) -> Self {
        match self {
            Self::State(state) => Self::State(state.clone()),
            Self::Handler(handler) => Self::Handler(handler.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn enter_hook_can_replace_context() {
        let hook = EnterHook::new(|mut ctx: Value| async move {
            ctx["count"] = json!(1);
            Ok(Some(ctx))
        });

        let replaced = hook.run(&json!({ "count": 0 })).await.unwrap();
        assert_eq!(replaced, Some(json!({ "count": 1 })));
    }

    #[tokio::test]
    async fn enter_hook_failure_is_returned() {
        let hook = EnterHook::new(|_ctx: Value| async move { Err("boom".into()) });

        let err = hook.run(&json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn plain_target_ignores_context() {
        let target: EventTarget<String, Value> = EventTarget::State("loading".to_string());
        let mut ctx = json!({ "count": 0 });

        assert_eq!(target.resolve(&mut ctx, None), "loading");
        assert_eq!(ctx, json!({ "count": 0 }));
    }

    #[test]
    fn handler_mutates_context_and_returns_target() {
        let target: EventTarget<String, Value> =
            EventTarget::Handler(EventHandler::new(|ctx: &mut Value, data: Option<&Value>| {
                ctx["count"] = data.cloned().unwrap_or(json!(0));
                "loading".to_string()
            }));
        let mut ctx = json!({ "count": 0 });

        let next = target.resolve(&mut ctx, Some(&json!(6)));

        assert_eq!(next, "loading");
        assert_eq!(ctx, json!({ "count": 6 }));
    }
}
