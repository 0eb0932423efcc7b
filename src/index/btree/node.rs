//! B-tree node.
//!
//! A [`Node`] holds its keys and values in two parallel, sorted vectors
//! plus, when internal, one more child than it has keys:
//!
//! ```text
//!              keys:     [ k0 ][ k1 ][ k2 ]
//!              children: c0    c1    c2    c3
//!
//!   every key in c0 <= k0 <= every key in c1 <= k1 <= ... <= every key in c3
//! ```
//!
//! Children are owned directly (`Vec<Node<V>>`). All traversal is top-down,
//! so nodes carry no parent pointers.

use crate::common::MinDegree;

/// A node of an [`OrderedIndex`](crate::OrderedIndex).
///
/// Nodes are only built and mutated by the index. Callers get read-only
/// access through [`OrderedIndex::root`](crate::OrderedIndex::root) for
/// diagnostics and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    /// Sorted keys (non-decreasing; duplicates allowed).
    pub(crate) keys: Vec<i64>,

    /// Values, parallel to `keys`.
    pub(crate) values: Vec<V>,

    /// Child subtrees. Empty for a leaf, `keys.len() + 1` otherwise.
    pub(crate) children: Vec<Node<V>>,

    /// Whether this node is a leaf.
    pub(crate) is_leaf: bool,
}

impl<V> Node<V> {
    /// Create an empty leaf.
    pub(crate) fn leaf() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            children: Vec::new(),
            is_leaf: true,
        }
    }

    /// Create an empty internal node.
    pub(crate) fn internal() -> Self {
        Self {
            is_leaf: false,
            ..Self::leaf()
        }
    }

    // ========================================================================
    // Read-only accessors
    // ========================================================================

    /// Whether this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// The keys stored in this node, in ascending order.
    #[inline]
    pub fn keys(&self) -> &[i64] {
        &self.keys
    }

    /// The values stored in this node, parallel to [`keys`](Self::keys).
    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// The child subtrees. Empty for a leaf.
    #[inline]
    pub fn children(&self) -> &[Node<V>] {
        &self.children
    }

    /// Number of keys in this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether this node holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The (key, value) pair at `idx`, if any.
    pub fn entry(&self, idx: usize) -> Option<(i64, &V)> {
        Some((*self.keys.get(idx)?, self.values.get(idx)?))
    }

    /// Iterate over this node's (key, value) pairs in order.
    pub fn entries(&self) -> impl Iterator<Item = (i64, &V)> + '_ {
        self.keys.iter().copied().zip(self.values.iter())
    }

    // ========================================================================
    // Helpers for the index
    // ========================================================================

    /// A node is full when it holds exactly 2T - 1 keys.
    #[inline]
    pub(crate) fn is_full(&self, t: MinDegree) -> bool {
        self.keys.len() == t.max_keys()
    }

    /// First position whose key is strictly greater than `key`.
    ///
    /// Used for insertion: equal keys stay to the left of the new one.
    #[inline]
    pub(crate) fn upper_bound(&self, key: i64) -> usize {
        self.keys.partition_point(|&k| k <= key)
    }

    /// First position whose key is greater than or equal to `key`.
    ///
    /// Used for search.
    #[inline]
    pub(crate) fn lower_bound(&self, key: i64) -> usize {
        self.keys.partition_point(|&k| k < key)
    }
}
