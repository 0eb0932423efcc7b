//! Search results.

/// Outcome of [`OrderedIndex::search`](crate::OrderedIndex::search).
///
/// A missing key is an expected outcome, not an error: `found()` is false
/// and `value()` is `None`. Either way `nodes_visited()` reports how many
/// nodes were entered on the way down, counting the root and the node
/// where the search stopped.
#[derive(Debug, PartialEq, Eq)]
pub struct SearchResult<'a, V> {
    value: Option<&'a V>,
    nodes_visited: usize,
}

impl<'a, V> SearchResult<'a, V> {
    pub(crate) fn hit(value: &'a V, nodes_visited: usize) -> Self {
        Self {
            value: Some(value),
            nodes_visited,
        }
    }

    pub(crate) fn miss(nodes_visited: usize) -> Self {
        Self {
            value: None,
            nodes_visited,
        }
    }

    /// Whether the key was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.value.is_some()
    }

    /// The value stored under the key, if found.
    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.value
    }

    /// Number of nodes entered, from the root to the terminating node.
    #[inline]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }
}

impl<V> Clone for SearchResult<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for SearchResult<'_, V> {}
