//! Per-item operation building over an array field.

use json_mutate_json_pointer::get_value_by_pointer;
use serde_json::Value;

use crate::json_patch::Op;

/// Decision returned by the callback of
/// [`build_array_items_json_patch_ops`] for one array element.
///
/// Operation paths are relative to the element; the builder anchors them
/// under `{array_pointer}/{index}` while flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemDecision {
    /// Leave the element alone.
    Skip,
    One(Op),
    Many(Vec<Op>),
}

/// Generate patch operations for the members of an array field.
///
/// Resolves `array_pointer` against `doc`; when the target is absent or
/// not an array the result is empty, not an error. Otherwise `decide` is
/// invoked once per element, in index order, with the element, its index,
/// and the array pointer. Every operation it returns is anchored under
/// the element and appended to the result, preserving per-index order.
///
/// ```
/// use json_mutate::{build_array_items_json_patch_ops, ItemDecision, Op};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"q": "A", "x": 1}, {"q": "B"}]});
/// let ops = build_array_items_json_patch_ops(&doc, "/items", |item, _, _| {
///     if item["q"] == "A" {
///         ItemDecision::One(Op::remove("/x"))
///     } else {
///         ItemDecision::Skip
///     }
/// });
/// assert_eq!(ops, vec![Op::remove("/items/0/x")]);
/// ```
pub fn build_array_items_json_patch_ops<F>(doc: &Value, array_pointer: &str, mut decide: F) -> Vec<Op>
where
    F: FnMut(&Value, usize, &str) -> ItemDecision,
{
    let items = match get_value_by_pointer(doc, array_pointer) {
        Some(Value::Array(items)) => items,
        _ => return Vec::new(),
    };
    let mut ops = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let item_pointer = format!("{array_pointer}/{index}");
        match decide(item, index, array_pointer) {
            ItemDecision::Skip => {}
            ItemDecision::One(op) => ops.push(anchor_under(op, &item_pointer)),
            ItemDecision::Many(item_ops) => {
                ops.extend(item_ops.into_iter().map(|op| anchor_under(op, &item_pointer)));
            }
        }
    }
    ops
}

fn anchor_under(op: Op, item_pointer: &str) -> Op {
    match op {
        Op::Add { path, value } => Op::Add { path: format!("{item_pointer}{path}"), value },
        Op::Replace { path, value } => Op::Replace { path: format!("{item_pointer}{path}"), value },
        Op::Remove { path } => Op::Remove { path: format!("{item_pointer}{path}") },
    }
}
