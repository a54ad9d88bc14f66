//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Simple state enumeration
//! - A transient state that forwards with goto
//!
//! Run with: cargo run --example traffic_light

use tracing_subscriber::EnvFilter;
use waypoint::builder::{MachineBuilder, StateBuilder};
use waypoint::{context_struct, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
        Blink,
    }
}

context_struct! {
    struct Cycle {
        laps: u32,
    }
    patch: CyclePatch
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut machine = MachineBuilder::new(Cycle { laps: 0 })
        .initial(TrafficLight::Red)
        .debug(true)
        .state(
            TrafficLight::Red,
            StateBuilder::new()
                .on("TIMER", TrafficLight::Green)
                .on("FAULT", TrafficLight::Blink)
                .enter(|mut cycle: Cycle| async move {
                    cycle.laps += 1;
                    Ok(Some(cycle))
                }),
        )
        .state(
            TrafficLight::Green,
            StateBuilder::new().on("TIMER", TrafficLight::Yellow),
        )
        .state(
            TrafficLight::Yellow,
            StateBuilder::new().on("TIMER", TrafficLight::Red),
        )
        // Blink is transient: entering it immediately forwards back to Red.
        .state(TrafficLight::Blink, StateBuilder::new().goto(TrafficLight::Red))
        .build()?;

    machine.start(None).await?;
    println!("Initial state: {:?}", machine.current_state());

    for _ in 0..6 {
        machine.send("TIMER", None, None).await?;
        println!("  -> {:?} (laps: {})", machine.current_state(), machine.context().laps);
    }

    machine.send("FAULT", None, None).await?;
    println!("After FAULT: {:?}", machine.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
