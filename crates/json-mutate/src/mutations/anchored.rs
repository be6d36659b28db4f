//! Path-anchored view over a [`MutationsAccumulator`].

use serde_json::Value;

use crate::json_patch::Op;

use super::accumulator::MutationsAccumulator;

/// Decorator that rewrites every path through an anchoring function before
/// delegating to the wrapped accumulator.
///
/// The view holds no sequence of its own. Every operation it creates is
/// stored by the wrapped accumulator, so a caller can build a sub-patch
/// addressed relative to a nested location without repeating the prefix,
/// while still contributing to one combined top-level patch.
///
/// ```
/// use json_mutate::{prefix_anchor, MutationsAccumulator};
///
/// let mut mutations = MutationsAccumulator::new();
/// let mut item = mutations.anchored(prefix_anchor("/items/2"));
/// item.remove_value("/units");
/// assert_eq!(mutations.patch_ops()[0].path(), "/items/2/units");
/// ```
#[derive(Debug)]
pub struct AnchoredMutationsAccumulator<'a, F> {
    inner: &'a mut MutationsAccumulator,
    anchor: F,
}

impl<'a, F> AnchoredMutationsAccumulator<'a, F>
where
    F: Fn(&str) -> String,
{
    pub fn new(inner: &'a mut MutationsAccumulator, anchor: F) -> Self {
        Self { inner, anchor }
    }

    /// Record an `add` at the anchored path and return it.
    pub fn add_value(&mut self, path: &str, value: impl Into<Value>) -> Op {
        let path = (self.anchor)(path);
        self.inner.add_value(path, value)
    }

    /// Record a `replace` at the anchored path and return it.
    pub fn replace_value(&mut self, path: &str, value: impl Into<Value>) -> Op {
        let path = (self.anchor)(path);
        self.inner.replace_value(path, value)
    }

    /// Record a `remove` at the anchored path and return it.
    pub fn remove_value(&mut self, path: &str) -> Op {
        let path = (self.anchor)(path);
        self.inner.remove_value(path)
    }

    /// Record one `remove` per path, each anchored, in argument order.
    pub fn remove_values<I>(&mut self, paths: I) -> Vec<Op>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| self.remove_value(path.as_ref()))
            .collect()
    }

    /// The wrapped accumulator's live sequence, anchored and unanchored
    /// operations alike.
    pub fn patch_ops(&self) -> &[Op] {
        self.inner.patch_ops()
    }
}

/// Anchoring function that prepends a fixed pointer prefix.
pub fn prefix_anchor(prefix: impl Into<String>) -> impl Fn(&str) -> String {
    let prefix = prefix.into();
    move |path| format!("{prefix}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anchors_every_mutation_method() {
        let mut mutations = MutationsAccumulator::new();
        let mut anchored = mutations.anchored(prefix_anchor("/items/3"));
        anchored.add_value("/name", json!("a"));
        anchored.replace_value("/qty", json!(2));
        anchored.remove_value("/draft");

        let ops = mutations.into_patch_ops();
        assert_eq!(ops[0], Op::add("/items/3/name", json!("a")));
        assert_eq!(ops[1], Op::replace("/items/3/qty", json!(2)));
        assert_eq!(ops[2], Op::remove("/items/3/draft"));
    }

    #[test]
    fn single_remove_lands_in_wrapped_sequence() {
        let mut mutations = MutationsAccumulator::new();
        let mut anchored = mutations.anchored(prefix_anchor("/items/2"));
        let op = anchored.remove_value("/units");
        assert_eq!(op, Op::remove("/items/2/units"));
        assert_eq!(anchored.patch_ops(), &[Op::remove("/items/2/units")]);
        assert_eq!(mutations.patch_ops(), &[Op::remove("/items/2/units")]);
        assert_eq!(mutations.len(), 1);
    }

    #[test]
    fn remove_values_anchors_each_path() {
        let mut mutations = MutationsAccumulator::new();
        let ops = mutations
            .anchored(prefix_anchor("/rows/0"))
            .remove_values(["/a", "/b"]);
        assert_eq!(ops, vec![Op::remove("/rows/0/a"), Op::remove("/rows/0/b")]);
    }

    #[test]
    fn raw_and_anchored_interleave_into_one_sequence() {
        let mut mutations = MutationsAccumulator::new();
        mutations.remove_value("/top");
        mutations
            .anchored(prefix_anchor("/items/0"))
            .remove_value("/x");
        mutations.add_value("/after", json!(true));

        let paths: Vec<&str> = mutations.patch_ops().iter().map(Op::path).collect();
        assert_eq!(paths, vec!["/top", "/items/0/x", "/after"]);
    }

    #[test]
    fn custom_anchor_functions_are_supported() {
        let mut mutations = MutationsAccumulator::new();
        let mut anchored = mutations.anchored(|path: &str| path.replace("/old", "/new"));
        anchored.remove_value("/old/field");
        assert_eq!(mutations.patch_ops()[0].path(), "/new/field");
    }
}
