//! Stripping of unresolvable remove operations from a candidate sequence.

use serde_json::Value;

use crate::json_patch::{validate_ops, Op, PatchError};

/// Reduce `ops` to a subsequence that validates cleanly against `doc`, by
/// repeatedly dropping removes whose path does not resolve.
///
/// Each round validates the whole candidate sequence. A reported
/// `NOT_FOUND` failure on a `remove` strips every operation of the same
/// kind and path (duplicates included) and triggers another round, so
/// index shifts caused by earlier operations are re-judged against the
/// reduced sequence. Any other failure ends the loop with the sequence
/// as it stands; detecting it is left to the subsequent apply.
///
/// The result preserves the relative order of the surviving operations,
/// and running the filter on its own output returns it unchanged.
pub fn filter_invalid_ops(ops: &[Op], doc: &Value) -> Vec<Op> {
    let mut current = ops.to_vec();
    loop {
        let error = match validate_ops(&current, doc, None) {
            None => return current,
            Some(error) => error,
        };
        match (&error.op, &error.error) {
            (Op::Remove { .. }, PatchError::NotFound) => {
                current.retain(|op| !is_same_shape(op, &error.op));
            }
            _ => return current,
        }
    }
}

/// Structural equivalence: same operation kind and same path. Values are
/// not compared.
fn is_same_shape(a: &Op, b: &Op) -> bool {
    match (a, b) {
        (Op::Add { path: pa, .. }, Op::Add { path: pb, .. }) => pa == pb,
        (Op::Replace { path: pa, .. }, Op::Replace { path: pb, .. }) => pa == pb,
        (Op::Remove { path: pa }, Op::Remove { path: pb }) => pa == pb,
        _ => false,
    }
}
