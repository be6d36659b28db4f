//! Builder and validation workflow over JSON Patch operations.
//!
//! A patch session starts with a [`MutationsAccumulator`] (optionally
//! viewed through [`AnchoredMutationsAccumulator`] or populated via
//! [`build_array_items_json_patch_ops`]), runs the accumulated sequence
//! through [`filter_invalid_ops`] against the source document, and hands
//! the survivors to [`json_patch_mutator`] for deferred application.

pub mod accumulator;
pub mod anchored;
pub mod array_items;
pub mod filter;
pub mod mutator;

pub use accumulator::MutationsAccumulator;
pub use anchored::{prefix_anchor, AnchoredMutationsAccumulator};
pub use array_items::{build_array_items_json_patch_ops, ItemDecision};
pub use filter::filter_invalid_ops;
pub use mutator::{json_patch_mutator, MutationError, MutationResult, Mutated};
