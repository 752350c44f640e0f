//! Character-indexed lookup tree.
//!
//! This module provides the prefix tree the transcoder's dictionary is built
//! on: stripped keys map to one or more original words, ambiguous keys
//! resolve to their full candidate set, and single-child chains can be
//! explored forward until a fork or a valued node.
//!
//! # Concurrency
//!
//! [`LookupTree`] serializes access through one `RwLock` over the whole tree:
//! insertions take the write lock, resolution and aggregation take the read
//! lock. Per-node descendant caches are `OnceCell`s, so readers racing to
//! fill a cache observe exactly one consistent initialization and can never
//! see a cache reflecting a partially applied insertion. All traversals are
//! bounded by key length; nothing blocks indefinitely.

mod error;
mod node;
mod resolve;

pub use error::LookupError;
pub use node::LookupNode;
pub use resolve::LookupResult;

use parking_lot::RwLock;

/// Result type for lookup operations.
pub type LookupOutcome<T> = Result<T, LookupError>;

/// An owned, immutable view of a resolved key, handed out by [`LookupTree`].
///
/// `values` are the values attached directly to the resolved node; when there
/// is more than one the key is ambiguous and the caller decides how to
/// present them. `candidates` is the full descendant set of the node, useful
/// when a partial resolution stopped at a fork. Both are sorted; the resolver
/// never picks a winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<V> {
    /// The matched key fragment.
    pub key: String,
    /// Values attached directly to the resolved node, in sorted order.
    pub values: Vec<V>,
    /// Every value reachable from the resolved node, in sorted order.
    pub candidates: Vec<V>,
}

/// A thread-safe lookup tree mapping string keys to sets of values.
#[derive(Debug)]
pub struct LookupTree<V> {
    root: RwLock<LookupNode<V>>,
}

impl<V> LookupTree<V> {
    /// Creates a new empty tree.
    pub fn new() -> Self {
        Self {
            root: RwLock::new(LookupNode::new()),
        }
    }
}

impl<V> Default for LookupTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone> LookupTree<V> {
    /// Inserts `value` under `key`. The empty key is a no-op.
    pub fn insert(&self, key: &str, value: V) {
        self.root.write().insert(key, value);
    }

    /// Resolves `key`, exactly or partially.
    ///
    /// `Ok(None)` is the normal outcome for an unknown key; see
    /// [`LookupNode::resolve`] for the exact and partial semantics.
    ///
    /// # Errors
    ///
    /// [`LookupError::EmptyKey`] when `key` is empty.
    pub fn resolve(&self, key: &str, partial: bool) -> LookupOutcome<Option<Match<V>>> {
        let root = self.root.read();
        let resolved = root.resolve(key, partial)?;
        Ok(resolved.map(|found| Match {
            key: found.key().to_owned(),
            values: found.node().values().iter().cloned().collect(),
            candidates: found.node().descendants().iter().cloned().collect(),
        }))
    }

    /// Explores forward from the root through the child reached by `start`.
    pub fn explore(&self, start: char) -> Option<Match<V>> {
        let root = self.root.read();
        root.explore(start).map(|found| Match {
            key: found.key().to_owned(),
            values: found.node().values().iter().cloned().collect(),
            candidates: found.node().descendants().iter().cloned().collect(),
        })
    }

    /// Every value in the tree, in sorted order.
    pub fn descendants(&self) -> Vec<V> {
        self.root.read().descendants().iter().cloned().collect()
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        let root = self.root.read();
        root.child_count() == 0 && !root.has_values()
    }
}
