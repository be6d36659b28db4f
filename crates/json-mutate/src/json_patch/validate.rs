//! JSON Patch operation validation against a document.
//!
//! Validation shares its semantics with application: a sequence is valid
//! exactly when applying it to a copy of the document succeeds. Running
//! against a copy keeps index-shift effects of earlier adds and removes
//! visible to later operations without touching the caller's document.

use serde_json::Value;

use super::apply::apply_patch;
use super::types::{ApplyPatchOptions, Op, OpValidator, ValidationError};

/// Validate a sequence of operations against a document.
///
/// Returns the first error found, or `None` when every operation would
/// apply cleanly. When `validator` is given it is consulted per operation
/// before that operation is checked structurally.
pub fn validate_ops(
    ops: &[Op],
    doc: &Value,
    validator: Option<&OpValidator>,
) -> Option<ValidationError> {
    let options = ApplyPatchOptions { mutate: true };
    apply_patch(doc.clone(), ops, validator, &options).err()
}

// ── Tests ─────────────────────────────────────────────────────────────────
