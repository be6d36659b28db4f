//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatchError {
    /// The operation path (or its parent) does not resolve to an existing value.
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    /// The parent of the target location is a scalar and cannot hold children.
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("POINTER_INVALID")]
    PointerInvalid,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
    /// A custom validator refused the operation.
    #[error("REJECTED: {0}")]
    Rejected(String),
}

/// First failure found while validating or applying an operation sequence.
///
/// Carries the classification, the offending operation and its index, and
/// the document state the operation was checked against.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Error in operation [index = {index}] ({error}).")]
pub struct ValidationError {
    #[source]
    pub error: PatchError,
    /// Position of the failing operation in the sequence.
    pub index: usize,
    pub op: Op,
    /// Document state at the time the operation failed. When earlier
    /// operations succeeded, this reflects their effects.
    pub tree: Value,
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
///
/// Paths are raw RFC 6901 pointer strings. No syntax check happens at
/// construction; a bad pointer surfaces as [`PatchError::PointerInvalid`]
/// when the operation is applied or validated.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
}

impl Op {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Op {
        Op::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Op {
        Op::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>) -> Op {
        Op::Remove { path: path.into() }
    }

    /// Returns the operation name string.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Replace { .. } => "replace",
            Op::Remove { .. } => "remove",
        }
    }

    /// Returns the pointer string of the operation.
    pub fn path(&self) -> &str {
        match self {
            Op::Add { path, .. } => path,
            Op::Replace { path, .. } => path,
            Op::Remove { path } => path,
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a single operation.
#[derive(Debug, Clone)]
pub struct OpResult {
    /// The document after applying the operation.
    pub doc: Value,
    /// The value at the path before the operation, if any.
    pub old: Option<Value>,
}

/// Result of applying a full patch.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Value,
    pub res: Vec<OpResult>,
}

/// Options for `apply_patch`.
#[derive(Debug, Clone)]
pub struct ApplyPatchOptions {
    /// If true, mutate the document in place (passed by value) and skip
    /// per-operation snapshots. If false, capture the document state after
    /// each operation.
    pub mutate: bool,
}

impl Default for ApplyPatchOptions {
    fn default() -> Self {
        Self { mutate: false }
    }
}

/// Per-operation validator consulted before each operation is applied.
///
/// Receives the operation, its index in the sequence, and the document
/// state it would be applied to. Returning an error aborts the patch.
pub type OpValidator = dyn Fn(&Op, usize, &Value) -> Result<(), PatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constructors_store_raw_paths() {
        let op = Op::add("/a/b", json!(1));
        assert_eq!(op.op_name(), "add");
        assert_eq!(op.path(), "/a/b");

        // Malformed pointers are accepted at construction time.
        let op = Op::remove("no-slash");
        assert_eq!(op.path(), "no-slash");
    }

    #[test]
    fn op_identity_is_structural() {
        assert_eq!(Op::add("/a", json!(1)), Op::add("/a", json!(1)));
        assert_ne!(Op::add("/a", json!(1)), Op::add("/a", json!(2)));
        assert_ne!(Op::add("/a", json!(1)), Op::replace("/a", json!(1)));
        assert_eq!(Op::remove("/a"), Op::remove("/a"));
    }

    #[test]
    fn validation_error_display() {
        let err = ValidationError {
            error: PatchError::NotFound,
            index: 3,
            op: Op::remove("/missing"),
            tree: json!({}),
        };
        assert_eq!(
            err.to_string(),
            "Error in operation [index = 3] (NOT_FOUND)."
        );
    }
}
