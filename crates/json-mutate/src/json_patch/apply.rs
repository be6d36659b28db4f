//! JSON Patch apply logic.
//!
//! Operations are applied sequentially; the first failure aborts the patch
//! and is reported as a [`ValidationError`]. Paths are resolved from their
//! raw pointer strings at apply time.

use json_mutate_json_pointer::{get_mut, is_valid_index, parse_json_pointer, validate_json_pointer, Path};
use serde_json::Value;

use super::types::{ApplyPatchOptions, Op, OpResult, OpValidator, PatchError, PatchResult, ValidationError};

// ── Path navigation ───────────────────────────────────────────────────────

fn resolve_path(pointer: &str) -> Result<Path, PatchError> {
    validate_json_pointer(pointer).map_err(|_| PatchError::PointerInvalid)?;
    Ok(parse_json_pointer(pointer))
}

/// Mutable navigation to the value at `path` (must exist).
fn get_mut_at<'a>(doc: &'a mut Value, path: &[String]) -> Result<&'a mut Value, PatchError> {
    get_mut(doc, path).ok_or(PatchError::NotFound)
}

/// Array steps must be canonical base-10 indices; `"01"` and `"1e0"` are
/// rejected rather than coerced.
fn parse_array_index(key: &str) -> Result<usize, PatchError> {
    if !is_valid_index(key) {
        return Err(PatchError::InvalidIndex);
    }
    key.parse().map_err(|_| PatchError::InvalidIndex)
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        let old = std::mem::replace(doc, value);
        return Ok(Some(old));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = get_mut_at(doc, parent_path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.clone(), value)),
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
                Ok(None)
            } else {
                let idx = parse_array_index(key)?;
                if idx > arr.len() {
                    return Err(PatchError::InvalidIndex);
                }
                arr.insert(idx, value);
                Ok(None)
            }
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Err(PatchError::InvalidTarget);
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = get_mut_at(doc, parent_path)?;
    match parent {
        Value::Object(map) => map.remove(key).ok_or(PatchError::NotFound).map(Some),
        Value::Array(arr) => {
            let idx = parse_array_index(key)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(Some(arr.remove(idx)))
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        let old = std::mem::replace(doc, value);
        return Ok(Some(old));
    }
    let (parent_path, key) = path.split_at(path.len() - 1);
    let key = &key[0];
    let parent = get_mut_at(doc, parent_path)?;
    match parent {
        Value::Object(map) => {
            if !map.contains_key(key) {
                return Err(PatchError::NotFound);
            }
            Ok(map.insert(key.clone(), value))
        }
        Value::Array(arr) => {
            let idx = parse_array_index(key)?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            let old = std::mem::replace(&mut arr[idx], value);
            Ok(Some(old))
        }
        _ => Err(PatchError::InvalidTarget),
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document (in-place mutation).
///
/// Returns the old value at the path, where one existed. The document is
/// left untouched when an error is returned.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => {
            let path = resolve_path(path)?;
            apply_add(doc, &path, value.clone())
        }
        Op::Replace { path, value } => {
            let path = resolve_path(path)?;
            apply_replace(doc, &path, value.clone())
        }
        Op::Remove { path } => {
            let path = resolve_path(path)?;
            apply_remove(doc, &path)
        }
    }
}

/// Apply a sequence of operations, returning the final document and one
/// snapshot per operation.
///
/// When `validator` is given it is consulted before each operation; its
/// error aborts the patch the same way an apply failure does.
pub fn apply_ops(
    mut doc: Value,
    ops: &[Op],
    validator: Option<&OpValidator>,
) -> Result<PatchResult, ValidationError> {
    let mut results = Vec::with_capacity(ops.len());
    for (index, op) in ops.iter().enumerate() {
        if let Some(validate) = validator {
            if let Err(error) = validate(op, index, &doc) {
                return Err(ValidationError { error, index, op: op.clone(), tree: doc });
            }
        }
        let old = match apply_op(&mut doc, op) {
            Ok(old) => old,
            Err(error) => return Err(ValidationError { error, index, op: op.clone(), tree: doc }),
        };
        results.push(OpResult { doc: doc.clone(), old });
    }
    Ok(PatchResult { doc, res: results })
}

/// Apply a sequence of operations with options (mutate vs. snapshot).
///
/// When `mutate: true`, ops are applied without capturing per-op
/// intermediate snapshots. When `mutate: false`, the full [`apply_ops`]
/// path is used, which captures the doc state after each op.
pub fn apply_patch(
    doc: Value,
    ops: &[Op],
    validator: Option<&OpValidator>,
    options: &ApplyPatchOptions,
) -> Result<PatchResult, ValidationError> {
    if options.mutate {
        let mut working = doc;
        for (index, op) in ops.iter().enumerate() {
            if let Some(validate) = validator {
                if let Err(error) = validate(op, index, &working) {
                    return Err(ValidationError { error, index, op: op.clone(), tree: working });
                }
            }
            if let Err(error) = apply_op(&mut working, op) {
                return Err(ValidationError { error, index, op: op.clone(), tree: working });
            }
        }
        Ok(PatchResult { doc: working, res: vec![] })
    } else {
        apply_ops(doc, ops, validator)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
