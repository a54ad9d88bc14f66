//! Context values carried across transitions.
//!
//! The engine never edits a context field by field. It either merges a
//! patch (shallow: patch keys overwrite, everything else is kept) or swaps
//! in a whole new value returned by an enter hook.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Debug;

/// Trait for values a machine can carry as its context.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Context;
/// use serde_json::json;
///
/// let mut ctx = json!({ "count": 0, "label": "idle" });
/// let patch = json!({ "count": 1 }).as_object().cloned().unwrap();
/// ctx.merge(patch);
///
/// assert_eq!(ctx, json!({ "count": 1, "label": "idle" }));
/// ```
pub trait Context: Clone + Debug + Send + Sync + 'static {
    /// Partial update applied by `start`/`send`.
    type Patch: Debug + Send + 'static;

    /// Shallow-merge `patch` into `self`.
    fn merge(&mut self, patch: Self::Patch);
}

/// A non-object value is replaced by the patch object, mirroring an object
/// spread over a scalar.
impl Context for Value {
    type Patch = Map<String, Value>;

    fn merge(&mut self, patch: Self::Patch) {
        match self {
            Value::Object(fields) => fields.extend(patch),
            other => *other = Value::Object(patch),
        }
    }
}

impl Context for Map<String, Value> {
    type Patch = Map<String, Value>;

    fn merge(&mut self, patch: Self::Patch) {
        self.extend(patch);
    }
}

impl<V> Context for HashMap<String, V>
where
    V: Clone + Debug + Send + Sync + 'static,
{
    type Patch = HashMap<String, V>;

    fn merge(&mut self, patch: Self::Patch) {
        self.extend(patch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn patch_keys_overwrite_and_others_survive() {
        let mut ctx = json!({ "count": 0, "name": "a" });
        ctx.merge(object(json!({ "count": 3 })));

        assert_eq!(ctx, json!({ "count": 3, "name": "a" }));
    }

    #[test]
    fn patch_can_add_new_keys() {
        let mut ctx = json!({ "count": 0 });
        ctx.merge(object(json!({ "extra": true })));

        assert_eq!(ctx, json!({ "count": 0, "extra": true }));
    }

    #[test]
    fn merge_is_shallow() {
        let mut ctx = json!({ "nested": { "a": 1, "b": 2 } });
        ctx.merge(object(json!({ "nested": { "a": 5 } })));

        assert_eq!(ctx, json!({ "nested": { "a": 5 } }));
    }

    #[test]
    fn scalar_context_is_replaced_by_patch() {
        let mut ctx = json!(null);
        ctx.merge(object(json!({ "count": 1 })));

        assert_eq!(ctx, json!({ "count": 1 }));
    }

    #[test]
    fn json_map_merges() {
        let mut ctx = object(json!({ "x": 1, "y": 2 }));
        ctx.merge(object(json!({ "y": 9 })));

        assert_eq!(Value::Object(ctx), json!({ "x": 1, "y": 9 }));
    }

    #[test]
    fn hash_map_merges() {
        let mut ctx: HashMap<String, i64> = HashMap::from([("a".into(), 1), ("b".into(), 2)]);
        ctx.merge(HashMap::from([("b".into(), 20)]));

        assert_eq!(ctx.get("a"), Some(&1));
        assert_eq!(ctx.get("b"), Some(&20));
    }
}
