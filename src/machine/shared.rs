//! A cloneable, task-safe handle around a [`Machine`].

use crate::core::{Context, State};
use crate::machine::engine::{Dispatch, Machine, Snapshot};
use crate::machine::error::MachineError;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Shares one machine between tasks.
///
/// Each `start`/`send` holds the lock for its whole chain, including every
/// awaited guard and enter hook, so operations never interleave. Later
/// callers wait their turn in lock order.
pub struct SharedMachine<S: State, C: Context> {
    inner: Arc<Mutex<Machine<S, C>>>,
    observer: watch::Receiver<Snapshot<S, C>>,
}

impl<S: State, C: Context> SharedMachine<S, C> {
    pub fn new(machine: Machine<S, C>) -> Self {
        let observer = machine.subscribe();
        Self {
            inner: Arc::new(Mutex::new(machine)),
            observer,
        }
    }

    pub async fn start(&self, patch: Option<C::Patch>) -> Result<(), MachineError> {
        self.inner.lock().await.start(patch).await
    }

    pub async fn send(
        &self,
        event: &str,
        data: Option<Value>,
        patch: Option<C::Patch>,
    ) -> Result<Dispatch, MachineError> {
        self.inner.lock().await.send(event, data, patch).await
    }

    /// Last published snapshot. Does not wait for an in-flight operation.
    pub fn snapshot(&self) -> Snapshot<S, C> {
        self.observer.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S, C>> {
        self.observer.clone()
    }
}

impl<S: State, C: Context> Clone for SharedMachine<S, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            observer: self.observer.clone(),
        }
    }
}

impl<S: State, C: Context> From<Machine<S, C>> for SharedMachine<S, C> {
    fn from(machine: Machine<S, C>) -> Self {
        Self::new(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MachineBuilder, StateBuilder};
    use serde_json::{json, Map};
    use std::time::Duration;

    fn patch(value: Value) -> Option<Map<String, Value>> {
        value.as_object().cloned()
    }

    fn slow_counter() -> Machine<String, Value> {
        MachineBuilder::new(json!({ "count": 0 }))
            .initial("idle".to_string())
            .state(
                "idle".to_string(),
                StateBuilder::new().handle("BUMP", |ctx: &mut Value, _data| {
                    let count = ctx["count"].as_i64().unwrap_or_default();
                    ctx["count"] = json!(count + 1);
                    "working".to_string()
                }),
            )
            .state(
                "working".to_string(),
                StateBuilder::new()
                    .enter(|ctx: Value| async move {
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        Ok(Some(ctx))
                    })
                    .goto("idle".to_string()),
            )
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn concurrent_sends_are_serialized() {
        let shared = SharedMachine::new(slow_counter());
        shared.start(None).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let handle = shared.clone();
            tasks.push(tokio::spawn(async move {
                handle.send("BUMP", None, None).await
            }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap(), Dispatch::Handled);
        }

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.state.as_deref(), Some("idle"));
        assert_eq!(snapshot.context, json!({ "count": 8 }));
    }

    #[tokio::test]
    async fn snapshot_tracks_published_state() {
        let shared: SharedMachine<_, _> = slow_counter().into();
        assert_eq!(shared.snapshot().state, None);

        shared.start(patch(json!({ "count": 10 }))).await.unwrap();

        assert_eq!(shared.snapshot().state.as_deref(), Some("idle"));
        assert_eq!(shared.snapshot().context, json!({ "count": 10 }));
    }
}
