//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use futures::executor::block_on;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use waypoint::builder::{MachineBuilder, StateBuilder};
use waypoint::{Dispatch, Machine};

fn state(name: &str) -> String {
    name.to_string()
}

fn click_machine() -> Machine<String, Value> {
    MachineBuilder::new(json!({ "count": 0, "label": "start" }))
        .initial(state("idle"))
        .state(state("idle"), StateBuilder::new().on("CLICK", state("loading")))
        .state(state("loading"), StateBuilder::new().on("LOADED", state("idle")))
        .build()
        .unwrap()
}

fn expected_target(current: &str, event: &str) -> Option<&'static str> {
    match (current, event) {
        ("idle", "CLICK") => Some("loading"),
        ("loading", "LOADED") => Some("idle"),
        _ => None,
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8) -> &'static str {
        match variant {
            0 => "CLICK",
            1 => "LOADED",
            _ => "UNKNOWN",
        }
    }
}

prop_compose! {
    fn arbitrary_patch()(
        count in proptest::option::of(0..100i64),
        label in proptest::option::of("[a-z]{1,6}"),
    ) -> Map<String, Value> {
        let mut patch = Map::new();
        if let Some(count) = count {
            patch.insert("count".to_string(), json!(count));
        }
        if let Some(label) = label {
            patch.insert("label".to_string(), json!(label));
        }
        patch
    }
}

proptest! {
    #[test]
    fn context_is_fold_of_applied_patches(
        ops in prop::collection::vec((arbitrary_event(), arbitrary_patch()), 1..20)
    ) {
        let mut machine = click_machine();
        block_on(machine.start(None)).unwrap();

        let mut expected_state = "idle";
        let mut expected_context = json!({ "count": 0, "label": "start" });

        for (event, patch) in ops {
            let dispatch = block_on(machine.send(event, None, Some(patch.clone()))).unwrap();

            match expected_target(expected_state, event) {
                Some(next) => {
                    prop_assert_eq!(dispatch, Dispatch::Handled);
                    expected_state = next;
                    expected_context.as_object_mut().unwrap().extend(patch);
                }
                None => prop_assert_eq!(dispatch, Dispatch::Unhandled),
            }

            prop_assert_eq!(machine.current_state().map(String::as_str), Some(expected_state));
            prop_assert_eq!(machine.context(), &expected_context);
        }
    }

    #[test]
    fn undeclared_events_change_nothing(
        event in "[a-z]{1,8}",
        patch in arbitrary_patch(),
    ) {
        let mut machine = click_machine();
        block_on(machine.start(None)).unwrap();
        let before = machine.snapshot();

        let dispatch = block_on(machine.send(&event, Some(json!(1)), Some(patch))).unwrap();

        prop_assert_eq!(dispatch, Dispatch::Unhandled);
        prop_assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn rejecting_guard_never_moves(count in 0..1000i64) {
        let mut machine: Machine<String, Value> = MachineBuilder::new(json!({ "count": count }))
            .initial(state("idle"))
            .state(state("idle"), StateBuilder::new().on("CLICK", state("locked")))
            .state(
                state("locked"),
                StateBuilder::new().when(|ctx: Value| async move { ctx["count"].as_i64() == Some(-1) }),
            )
            .build()
            .unwrap();
        block_on(machine.start(None)).unwrap();

        block_on(machine.send("CLICK", None, None)).unwrap();

        prop_assert_eq!(machine.current_state().map(String::as_str), Some("idle"));
    }

    #[test]
    fn goto_chain_settles_at_last_state(length in 1..20usize) {
        let names: Vec<String> = (0..=length).map(|i| format!("s{i}")).collect();
        let mut builder = MachineBuilder::new(json!({ "visited": [] })).initial(names[0].clone());
        for (i, name) in names.iter().enumerate() {
            let visited = name.clone();
            let mut node = StateBuilder::new().enter(move |mut ctx: Value| {
                let visited = visited.clone();
                async move {
                    ctx["visited"].as_array_mut().unwrap().push(json!(visited));
                    Ok(Some(ctx))
                }
            });
            if let Some(next) = names.get(i + 1) {
                node = node.goto(next.clone());
            }
            builder = builder.state(name.clone(), node);
        }
        let mut machine = builder.build().unwrap();

        block_on(machine.start(None)).unwrap();

        prop_assert_eq!(machine.current_state(), names.last());
        prop_assert_eq!(&machine.context()["visited"], &json!(names));
    }
}
