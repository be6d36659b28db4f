//! Ordered accumulation of JSON Patch operations.

use serde_json::Value;

use crate::json_patch::Op;

use super::anchored::AnchoredMutationsAccumulator;

/// Stateful builder that records add/replace/remove operations in call
/// order.
///
/// Each mutating method appends exactly one operation (or one per path for
/// [`remove_values`](Self::remove_values)) and returns the created
/// operation, so a caller can aggregate results structurally while the
/// accumulator keeps the full sequence for later retrieval. Constructing
/// an operation never touches any document.
///
/// ```
/// use json_mutate::MutationsAccumulator;
/// use serde_json::json;
///
/// let mut mutations = MutationsAccumulator::new();
/// mutations.add_value("/name", json!("Form"));
/// mutations.remove_value("/draft");
/// assert_eq!(mutations.patch_ops().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MutationsAccumulator {
    ops: Vec<Op>,
}

impl MutationsAccumulator {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Record an `add` operation and return it.
    pub fn add_value(&mut self, path: impl Into<String>, value: impl Into<Value>) -> Op {
        let op = Op::add(path, value);
        self.ops.push(op.clone());
        op
    }

    /// Record a `replace` operation and return it.
    pub fn replace_value(&mut self, path: impl Into<String>, value: impl Into<Value>) -> Op {
        let op = Op::replace(path, value);
        self.ops.push(op.clone());
        op
    }

    /// Record a `remove` operation and return it.
    pub fn remove_value(&mut self, path: impl Into<String>) -> Op {
        let op = Op::remove(path);
        self.ops.push(op.clone());
        op
    }

    /// Record one `remove` operation per path, in argument order.
    pub fn remove_values<I>(&mut self, paths: I) -> Vec<Op>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        paths.into_iter().map(|path| self.remove_value(path)).collect()
    }

    /// The live accumulated sequence. Reflects every call made so far.
    pub fn patch_ops(&self) -> &[Op] {
        &self.ops
    }

    /// Consume the accumulator and take ownership of the sequence.
    pub fn into_patch_ops(self) -> Vec<Op> {
        self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// View this accumulator through an anchoring function. Operations
    /// created through the view land in this accumulator's sequence with
    /// their paths rewritten by `anchor`.
    pub fn anchored<F>(&mut self, anchor: F) -> AnchoredMutationsAccumulator<'_, F>
    where
        F: Fn(&str) -> String,
    {
        AnchoredMutationsAccumulator::new(self, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_ops_in_call_order() {
        let mut mutations = MutationsAccumulator::new();
        mutations.add_value("/a", json!(1));
        mutations.replace_value("/b", json!(2));
        mutations.remove_value("/c");

        let ops = mutations.patch_ops();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0], Op::add("/a", json!(1)));
        assert_eq!(ops[1], Op::replace("/b", json!(2)));
        assert_eq!(ops[2], Op::remove("/c"));
    }

    #[test]
    fn returns_the_created_op() {
        let mut mutations = MutationsAccumulator::new();
        let op = mutations.add_value("/a", json!({"x": 1}));
        assert_eq!(op, Op::add("/a", json!({"x": 1})));
        assert_eq!(mutations.patch_ops(), &[op]);
    }

    #[test]
    fn remove_values_appends_one_op_per_path() {
        let mut mutations = MutationsAccumulator::new();
        let ops = mutations.remove_values(["/a", "/b", "/c"]);
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[1], Op::remove("/b"));
        assert_eq!(mutations.patch_ops(), &ops[..]);
    }

    #[test]
    fn returned_ops_aggregate_independently() {
        let mut mutations = MutationsAccumulator::new();
        let mut collected = Vec::new();
        collected.push(mutations.add_value("/a", json!(1)));
        collected.extend(mutations.remove_values(["/b", "/c"]));
        assert_eq!(collected.len(), 3);
        assert_eq!(mutations.patch_ops(), &collected[..]);
    }

    #[test]
    fn starts_empty() {
        let mutations = MutationsAccumulator::default();
        assert!(mutations.is_empty());
        assert_eq!(mutations.len(), 0);
        assert!(mutations.patch_ops().is_empty());
    }

    #[test]
    fn into_patch_ops_materializes() {
        let mut mutations = MutationsAccumulator::new();
        mutations.remove_value("/x");
        let ops = mutations.into_patch_ops();
        assert_eq!(ops, vec![Op::remove("/x")]);
    }
}
