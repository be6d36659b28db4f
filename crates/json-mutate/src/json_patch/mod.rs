//! JSON Patch implementation (RFC 6902, mutation subset).
//!
//! Supports the three mutating operations the builder layer produces:
//! `add`, `remove`, `replace`. Operations carry raw RFC 6901 pointer
//! strings; syntax and resolvability are judged against a concrete
//! document by [`apply_patch`] and [`validate_ops`], never at
//! construction time.

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{
    ApplyPatchOptions, Op, OpResult, OpValidator, PatchError, PatchResult, ValidationError,
};
pub use validate::validate_ops;
