//! The B-tree index: insertion with proactive splitting, and search.
//!
//! Insertion is a single top-down pass. Before descending into a child
//! that is already full (2T - 1 keys), the child is split and its median
//! moves up into the parent, which is known to have room. A full root is
//! handled by first growing a new root above it. No insertion ever has to
//! walk back up the tree.

use std::sync::atomic::Ordering;

use crate::common::{MinDegree, Result};
use crate::index::btree::{IndexStats, Iter, Node, SearchResult, StatsSnapshot};

/// An in-memory B-tree mapping `i64` keys to values of type `V`.
///
/// Duplicate keys are allowed. Equal keys keep their insertion order: a
/// later insert lands to the right of every earlier equal key.
///
/// The index does no locking. Callers that share one across threads must
/// serialize access themselves, for example with
/// [`SharedIndex`](crate::SharedIndex).
///
/// # Example
/// ```
/// use recordindex::{OrderedIndex, Record};
///
/// let mut index = OrderedIndex::new(2).unwrap();
/// index.insert(23, Record::new(1034, "Alice", 23));
/// index.insert(27, Record::new(1089, "Carol", 27));
///
/// let result = index.search(27);
/// assert!(result.found());
/// assert_eq!(result.value().unwrap().name, "Carol");
/// assert_eq!(result.nodes_visited(), 1);
///
/// assert!(!index.search(99).found());
/// ```
#[derive(Debug)]
pub struct OrderedIndex<V> {
    /// Minimum degree (T), fixed at construction.
    min_degree: MinDegree,

    /// The root. Replaced as a whole when the tree grows a level.
    root: Node<V>,

    /// Number of (key, value) pairs stored.
    len: usize,

    /// Edges from the root to any leaf (0 while the root is a leaf).
    height: usize,

    /// Operation counters.
    stats: IndexStats,
}

impl<V> OrderedIndex<V> {
    /// Create an empty index with minimum degree `min_degree`.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `min_degree < 2` or `min_degree > usize::MAX / 2`.
    /// No index is returned.
    pub fn new(min_degree: usize) -> Result<Self> {
        let t = MinDegree::new(min_degree).inspect_err(|err| {
            tracing::warn!(target: "recordindex::index", %err, "rejected index configuration");
        })?;
        Ok(Self::with_min_degree(t))
    }

    /// Create an empty index from an already validated minimum degree.
    pub fn with_min_degree(min_degree: MinDegree) -> Self {
        tracing::debug!(
            target: "recordindex::index",
            min_degree = min_degree.get(),
            "created ordered index"
        );
        Self {
            min_degree,
            root: Node::leaf(),
            len: 0,
            height: 0,
            stats: IndexStats::new(),
        }
    }

    // ========================================================================
    // Public API: Accessors
    // ========================================================================

    /// The minimum degree this index was built with.
    #[inline]
    pub fn min_degree(&self) -> MinDegree {
        self.min_degree
    }

    /// Number of (key, value) pairs stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Edges from the root to any leaf. A lone leaf root has height 0.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the root node, for diagnostics and tests.
    #[inline]
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// In-order iterator over all (key, value) pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, self.len)
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Reset the operation counters to zero.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert a (key, value) pair.
    ///
    /// Never fails. If the root is full, a new root is grown above it and
    /// the old root is split before the pair is placed, so the height only
    /// ever changes by one whole level at the top.
    pub fn insert(&mut self, key: i64, value: V) {
        let t = self.min_degree;

        if self.root.is_full(t) {
            let old_root = std::mem::replace(&mut self.root, Node::leaf());
            let mut new_root = Node::internal();
            new_root.children.push(old_root);
            Self::split_child(&mut new_root, 0, t, &self.stats);
            self.root = new_root;
            self.height += 1;

            self.stats.root_splits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(
                target: "recordindex::split",
                height = self.height,
                len = self.len,
                "split root"
            );
        }

        Self::insert_non_full(&mut self.root, t, &self.stats, key, value);
        self.len += 1;
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Insert into the subtree rooted at `node`, which is not full.
    fn insert_non_full(node: &mut Node<V>, t: MinDegree, stats: &IndexStats, key: i64, value: V) {
        if node.is_leaf {
            // Before the first strictly greater key: ties stay in insertion order
            let pos = node.upper_bound(key);
            node.keys.insert(pos, key);
            node.values.insert(pos, value);
            return;
        }

        // Skip every key <= new key, so equal keys descend to the right
        let mut idx = node.upper_bound(key);

        if node.children[idx].is_full(t) {
            Self::split_child(node, idx, t, stats);
            // The promoted median now sits at idx; equal keys go right of it too
            if node.keys[idx] <= key {
                idx += 1;
            }
        }

        Self::insert_non_full(&mut node.children[idx], t, stats, key, value);
    }

    /// Split the full child at `idx` of `parent` around its median.
    ///
    /// The child keeps its first T - 1 pairs (and first T children), a new
    /// right sibling takes the last T - 1 pairs (and last T children), and
    /// the median moves into `parent` at `idx`. `parent` must not be full.
    fn split_child(parent: &mut Node<V>, idx: usize, t: MinDegree, stats: &IndexStats) {
        let mid = t.median();

        let (median_key, median_value, sibling) = {
            let child = &mut parent.children[idx];
            debug_assert_eq!(child.len(), t.max_keys(), "split of a non-full node");

            let mut sibling = if child.is_leaf {
                Node::leaf()
            } else {
                Node::internal()
            };
            sibling.keys = child.keys.split_off(mid + 1);
            sibling.values = child.values.split_off(mid + 1);
            if !child.is_leaf {
                sibling.children = child.children.split_off(mid + 1);
            }

            // Median is now the last pair left in the child
            let median_key = child.keys.remove(mid);
            let median_value = child.values.remove(mid);
            (median_key, median_value, sibling)
        };

        tracing::trace!(
            target: "recordindex::split",
            child = idx,
            median = median_key,
            leaf = sibling.is_leaf,
            "split full child"
        );

        parent.keys.insert(idx, median_key);
        parent.values.insert(idx, median_value);
        parent.children.insert(idx + 1, sibling);
        stats.node_splits.fetch_add(1, Ordering::Relaxed);
    }

    // ========================================================================
    // Public API: Search
    // ========================================================================

    /// Look up `key`, counting the nodes entered on the way.
    ///
    /// At each node the search stops on the first stored key that is not
    /// less than `key`. An exact match returns immediately; otherwise the
    /// search descends into the child left of that key, or reports a miss
    /// at a leaf. With duplicates, the first match on the path is returned.
    pub fn search(&self, key: i64) -> SearchResult<'_, V> {
        let mut node = &self.root;
        let mut visited = 1;

        let result = loop {
            let idx = node.lower_bound(key);
            if idx < node.keys.len() && node.keys[idx] == key {
                break SearchResult::hit(&node.values[idx], visited);
            }
            if node.is_leaf {
                break SearchResult::miss(visited);
            }
            node = &node.children[idx];
            visited += 1;
        };

        self.stats.record_search(result.found(), result.nodes_visited());
        result
    }

    /// Whether `key` is stored at least once.
    pub fn contains_key(&self, key: i64) -> bool {
        self.search(key).found()
    }
}

impl<V> Extend<(i64, V)> for OrderedIndex<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, V> IntoIterator for &'a OrderedIndex<V> {
    type Item = (i64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
