//! Deferred application of an operation sequence to a document.

use serde_json::Value;
use thiserror::Error;

use crate::json_patch::{apply_patch, ApplyPatchOptions, Op, OpValidator, ValidationError};

/// Successful mutation: the new document and the operations applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutated {
    pub doc: Value,
    pub patch_ops: Vec<Op>,
}

/// Failed mutation: the operations that were attempted and the failure.
///
/// The document the mutation was built over is never modified; there is no
/// partial result to observe.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{error}")]
pub struct MutationError {
    pub patch_ops: Vec<Op>,
    #[source]
    pub error: ValidationError,
}

/// Outcome of a deferred mutation. Matched by variant, never by probing
/// fields.
pub type MutationResult = Result<Mutated, MutationError>;

/// Build a deferred mutation of `doc` by `ops`.
///
/// The returned closure owns snapshots of both inputs taken now, so later
/// changes to the caller's document or sequence do not leak in. Invoking
/// it applies the operations sequentially to a copy, capturing one
/// intermediate snapshot per operation, and never panics on a bad patch:
/// any failure, a malformed pointer, a type mismatch, a validator
/// rejection, comes back as the error variant.
///
/// When `validator` is given it is consulted per operation before that
/// operation is applied.
///
/// ```
/// use json_mutate::{json_patch_mutator, Op};
/// use serde_json::json;
///
/// let doc = json!({"code": "Q1", "name": "Form"});
/// let mutate = json_patch_mutator(&doc, &[Op::remove("/code")], None);
/// let mutated = mutate().unwrap();
/// assert_eq!(mutated.doc, json!({"name": "Form"}));
/// ```
pub fn json_patch_mutator(
    doc: &Value,
    ops: &[Op],
    validator: Option<Box<OpValidator>>,
) -> impl FnOnce() -> MutationResult {
    let doc = doc.clone();
    let ops = ops.to_vec();
    move || {
        let options = ApplyPatchOptions { mutate: false };
        match apply_patch(doc, &ops, validator.as_deref(), &options) {
            Ok(result) => Ok(Mutated { doc: result.doc, patch_ops: ops }),
            Err(error) => Err(MutationError { patch_ops: ops, error }),
        }
    }
}
