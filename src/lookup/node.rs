//! Node implementation for the lookup tree.
//!
//! Nodes are the building blocks of the tree: each node is keyed by a single
//! character, owns its children exclusively, and carries the set of values
//! terminating exactly at it. Every node additionally caches the ordered set
//! of all values reachable from it; the cache is cleared whenever a value is
//! inserted anywhere in the node's subtree.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::OnceCell;

/// A single node of the lookup tree.
///
/// Ownership is strictly hierarchical: a node owns its children and nothing
/// else references them, so the tree is acyclic by construction.
#[derive(Debug)]
pub struct LookupNode<V> {
    /// Map of characters to child nodes. A child exists iff at least one
    /// inserted key passes through that character.
    children: BTreeMap<char, LookupNode<V>>,

    /// Values terminating exactly at this node. Set semantics: re-inserting
    /// an existing value is a no-op.
    values: BTreeSet<V>,

    /// Lazily computed ordered set of every value in this subtree, own values
    /// included. `OnceCell` lets concurrent readers race to fill it while the
    /// tree is behind a shared lock; writers clear it through `&mut` access.
    reachable: OnceCell<BTreeSet<V>>,
}

impl<V> LookupNode<V> {
    /// Creates a new empty node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            values: BTreeSet::new(),
            reachable: OnceCell::new(),
        }
    }
}

impl<V> Default for LookupNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone> LookupNode<V> {
    /// Inserts `value` under `key`, creating intermediate nodes as needed.
    ///
    /// Walks the key one character at a time; at the final character the
    /// value is added to that child's value set. Every node on the traversed
    /// path, this node included, has its descendant cache cleared, because
    /// the new value is now reachable from all of them.
    ///
    /// The empty key is a no-op, not an error: the surrounding codec feeds
    /// words whose stripped form may be empty, and those must simply vanish.
    pub fn insert(&mut self, key: &str, value: V) {
        let Some(first) = key.chars().next() else {
            return;
        };

        self.reachable.take();

        let rest = &key[first.len_utf8()..];
        let child = self.children.entry(first).or_default();
        if rest.is_empty() {
            child.add_value(value);
        } else {
            child.insert(rest, value);
        }
    }

    /// Adds a value terminating at this node, invalidating its cache.
    pub fn add_value(&mut self, value: V) {
        self.reachable.take();
        self.values.insert(value);
    }

    /// The values directly attached to this node. O(1), no side effects.
    pub fn values(&self) -> &BTreeSet<V> {
        &self.values
    }

    /// Whether any value terminates exactly at this node.
    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    /// An ordered set of every value in this node's subtree.
    ///
    /// Computed once per cache generation by a depth-first traversal; later
    /// calls return the cached set until the next insertion below this node
    /// invalidates it.
    pub fn descendants(&self) -> &BTreeSet<V> {
        self.reachable.get_or_init(|| {
            let mut collected = BTreeSet::new();
            self.collect_into(&mut collected);
            collected
        })
    }

    /// Adds this node's values and those of every child to `collected`.
    fn collect_into(&self, collected: &mut BTreeSet<V>) {
        collected.extend(self.values.iter().cloned());
        for child in self.children.values() {
            child.collect_into(collected);
        }
    }

    /// The number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The child reached through `c`, if any key passes through it.
    pub(crate) fn child(&self, c: char) -> Option<&Self> {
        self.children.get(&c)
    }

    /// The sole child of this node, or `None` when the node has zero or
    /// several children.
    pub(crate) fn single_child(&self) -> Option<(char, &Self)> {
        if self.children.len() != 1 {
            return None;
        }
        self.children.iter().next().map(|(c, node)| (*c, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_attaches_value_at_end_of_key() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("Hll", "Hello");

        let node = root
            .child('H')
            .and_then(|n| n.child('l'))
            .and_then(|n| n.child('l'))
            .expect("path for 'Hll' should exist");
        assert!(node.values().contains("Hello"));
        assert!(root.values().is_empty());
    }

    #[test]
    fn empty_key_is_a_no_op() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("", "nothing");

        assert_eq!(root.child_count(), 0);
        assert!(root.descendants().is_empty());
    }

    #[test]
    fn duplicate_values_collapse() {
        let mut root: LookupNode<String> = LookupNode::new();
        root.insert("n", "an".to_owned());
        root.insert("n", "an".to_owned());
        root.insert("n", "in".to_owned());

        let node = root.child('n').unwrap();
        assert_eq!(node.values().len(), 2);
        assert!(node.values().contains("an"));
        assert!(node.values().contains("in"));
    }

    #[test]
    fn descendants_aggregate_whole_subtree() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("an", "a");
        root.insert("ant", "b");
        root.insert("x", "c");

        let all: Vec<&str> = root.descendants().iter().copied().collect();
        assert_eq!(all, vec!["a", "b", "c"]);

        let a_node = root.child('a').unwrap();
        let under_a: Vec<&str> = a_node.descendants().iter().copied().collect();
        assert_eq!(under_a, vec!["a", "b"]);
    }

    #[test]
    fn descendants_are_cached_between_insertions() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("Hll", "Hello");

        let first = root.descendants() as *const BTreeSet<&str>;
        let second = root.descendants() as *const BTreeSet<&str>;
        assert_eq!(first, second);
    }

    #[test]
    fn insertion_invalidates_caches_along_the_path() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("Hll", "Hello");

        // Warm the caches at the root and at an intermediate node.
        assert_eq!(root.descendants().len(), 1);
        assert_eq!(root.child('H').unwrap().descendants().len(), 1);

        root.insert("Hlp", "Help");

        // The very next call must reflect the new value on every ancestor.
        assert_eq!(root.descendants().len(), 2);
        let h_node = root.child('H').unwrap();
        assert!(h_node.descendants().contains("Help"));
        assert!(h_node.descendants().contains("Hello"));
    }

    #[test]
    fn sibling_caches_survive_unrelated_insertions() {
        let mut root: LookupNode<&str> = LookupNode::new();
        root.insert("an", "a");
        root.insert("zu", "z");

        let a_before = root.child('a').unwrap().descendants() as *const BTreeSet<&str>;
        root.insert("zulu", "zz");
        let a_after = root.child('a').unwrap().descendants() as *const BTreeSet<&str>;

        // 'a' is not on the inserted path, its cache stays put.
        assert_eq!(a_before, a_after);
    }
}
