//! json-mutate — builders and validation for RFC 6902 JSON Patch mutations.
//!
//! The [`json_patch`] module carries the operation model and the primitives
//! that apply and validate operation sequences against a document. The
//! [`mutations`] module layers the authoring workflow on top: accumulators
//! that collect operations, path anchoring, array-driven builders, filtering
//! of stale operations, and deferred patch application.

pub mod json_patch;
pub mod mutations;

pub use json_patch::{
    apply_patch, validate_ops, ApplyPatchOptions, Op, OpResult, OpValidator, PatchError,
    PatchResult, ValidationError,
};
pub use mutations::{
    build_array_items_json_patch_ops, filter_invalid_ops, json_patch_mutator, prefix_anchor,
    AnchoredMutationsAccumulator, ItemDecision, Mutated, MutationError, MutationResult,
    MutationsAccumulator,
};
