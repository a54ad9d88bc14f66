//! Loader with Guards and Redirects
//!
//! This example drives a small fetch workflow through a shared machine.
//!
//! Key concepts:
//! - Async guards that admit, reject or redirect
//! - Enter hooks that replace the context
//! - Observing published snapshots from another task
//!
//! Run with: cargo run --example loader

use serde_json::{json, Value};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use waypoint::builder::{MachineBuilder, StateBuilder};
use waypoint::{GuardOutcome, SharedMachine};

fn state(name: &str) -> String {
    name.to_string()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Loader Example ===\n");

    let machine = MachineBuilder::new(json!({ "attempts": 0, "items": [] }))
        .initial(state("idle"))
        .state(
            state("idle"),
            StateBuilder::new().handle("FETCH", |ctx: &mut Value, _data| {
                let attempts = ctx["attempts"].as_i64().unwrap_or_default();
                ctx["attempts"] = json!(attempts + 1);
                state("loading")
            }),
        )
        .state(
            state("loading"),
            StateBuilder::new()
                .when(|ctx: Value| async move {
                    match ctx["attempts"].as_i64() {
                        Some(n) if n > 3 => GuardOutcome::RedirectTo(state("exhausted")),
                        _ => GuardOutcome::Admit,
                    }
                })
                .enter(|mut ctx: Value| async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    ctx["items"] = json!(["a", "b", "c"]);
                    Ok(Some(ctx))
                })
                .goto(state("ready")),
        )
        .state(
            state("ready"),
            StateBuilder::new().on("RESET", state("idle")),
        )
        .state(state("exhausted"), StateBuilder::new())
        .build()?;

    let shared = SharedMachine::new(machine);
    let mut observer = shared.subscribe();
    let watcher = tokio::spawn(async move {
        while observer.changed().await.is_ok() {
            let snapshot = observer.borrow_and_update().clone();
            println!("  observed: {:?} {}", snapshot.state, snapshot.context);
        }
    });

    shared.start(None).await?;
    for _ in 0..5 {
        shared.send("FETCH", None, None).await?;
        shared.send("RESET", None, None).await?;
    }

    println!("\nFinal state: {:?}", shared.snapshot().state);
    drop(shared);
    watcher.await?;

    println!("\n=== Example Complete ===");
    Ok(())
}
