//! Key resolution over the lookup tree.
//!
//! Three operations are built on top of [`LookupNode`]: exact resolution,
//! partial resolution, and straight-line exploration. All of them return an
//! explicit not-found outcome rather than an error; the only error condition
//! is an empty key, which is a contract violation by the caller.

use super::error::LookupError;
use super::node::LookupNode;

/// The outcome of a successful resolution: the matched key fragment together
/// with a borrowed reference to the resolved node.
///
/// Results are produced on the fly and never stored; the borrow ties them to
/// the tree they came from.
#[derive(Debug)]
pub struct LookupResult<'a, V> {
    key: String,
    node: &'a LookupNode<V>,
}

impl<'a, V> LookupResult<'a, V> {
    fn new(key: String, node: &'a LookupNode<V>) -> Self {
        Self { key, node }
    }

    /// The key fragment this result matched. For exact and partial resolution
    /// this is the queried key; for straight-line exploration it is the
    /// explored segment only.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node the key resolved to.
    pub fn node(&self) -> &'a LookupNode<V> {
        self.node
    }
}

impl<V: Ord + Clone> LookupNode<V> {
    /// Resolves `key` against the tree rooted at this node.
    ///
    /// Descends one character per key position and fails with `Ok(None)` as
    /// soon as a required child is absent. On landing:
    ///
    /// * exact mode (`partial == false`): the landed node must have directly
    ///   attached values, otherwise the key is not resolved;
    /// * partial mode: a landed node that already has values, or that forks
    ///   into several children, is returned as-is for the caller to
    ///   disambiguate; a pure pass-through node (no values, one child) is
    ///   explored forward along its single-child chain instead, stopping at
    ///   the nearest valued node or fork.
    ///
    /// Partial mode never synthesizes a match from nothing: if the base key
    /// itself does not resolve, the outcome is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`LookupError::EmptyKey`] when `key` is empty.
    pub fn resolve(&self, key: &str, partial: bool) -> Result<Option<LookupResult<'_, V>>, LookupError> {
        if key.is_empty() {
            return Err(LookupError::EmptyKey);
        }

        let Some(node) = self.find(key) else {
            return Ok(None);
        };

        if partial {
            if node.has_values() || node.child_count() > 1 {
                return Ok(Some(LookupResult::new(key.to_owned(), node)));
            }

            return match node.single_child() {
                Some((c, child)) => Ok(walk_straight(String::from(c), child)),
                None => Ok(None),
            };
        }

        if node.has_values() {
            Ok(Some(LookupResult::new(key.to_owned(), node)))
        } else {
            Ok(None)
        }
    }

    /// Walks the tree one character per key position, or `None` at the first
    /// missing child.
    fn find(&self, key: &str) -> Option<&Self> {
        let mut node = self;
        for c in key.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Starts a straight-line exploration through the child reached by
    /// `start`, with the accumulated key fragment seeded to `start`.
    ///
    /// Returns `None` when this node has no child for `start`.
    pub fn explore(&self, start: char) -> Option<LookupResult<'_, V>> {
        let child = self.child(start)?;
        walk_straight(String::from(start), child)
    }
}

/// Walks forward through single-child chains until a node with attached
/// values or a fork (descendant-set size > 1) is found.
///
/// Each step consumes exactly one more character and never revisits a node,
/// so the walk terminates for any finite tree.
fn walk_straight<V: Ord + Clone>(
    mut fragment: String,
    mut node: &LookupNode<V>,
) -> Option<LookupResult<'_, V>> {
    loop {
        if node.has_values() || node.descendants().len() > 1 {
            return Some(LookupResult::new(fragment, node));
        }

        let (c, child) = node.single_child()?;
        fragment.push(c);
        node = child;
    }
}
