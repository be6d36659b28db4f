//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in the RFC 6902 format.
//! Decoding checks the operation shape only; pointer strings are carried
//! through verbatim and judged when the operation is applied or validated.

use serde_json::{json, Value};

use crate::json_patch::types::{Op, PatchError};

fn decode_path(obj: &serde_json::Map<String, Value>) -> Result<String, PatchError> {
    obj.get("path")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| PatchError::InvalidOp("path must be a string".into()))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": path,
            "value": value
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": path,
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": path
        }),
    }
}

/// Serialize a list of operations to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize a `serde_json::Value` into an `Op`.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = obj
        .get("op")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PatchError::InvalidOp("missing 'op' field".into()))?;
    let path = decode_path(obj)?;

    match op_str {
        "add" => {
            let value = obj
                .get("value")
                .ok_or_else(|| PatchError::InvalidOp("add requires 'value'".into()))?
                .clone();
            Ok(Op::Add { path, value })
        }
        "replace" => {
            let value = obj
                .get("value")
                .ok_or_else(|| PatchError::InvalidOp("replace requires 'value'".into()))?
                .clone();
            Ok(Op::Replace { path, value })
        }
        "remove" => Ok(Op::Remove { path }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Deserialize a JSON array into a list of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
