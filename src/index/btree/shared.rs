//! Caller-side serialization for an index shared between threads.
//!
//! [`OrderedIndex`] itself takes no locks. `SharedIndex` wraps one in a
//! reader-writer lock: searches share the read side, inserts take the
//! write side.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::Result;
use crate::index::btree::{OrderedIndex, SearchResult, StatsSnapshot};

/// An [`OrderedIndex`] behind a `parking_lot::RwLock`.
///
/// # Thread Safety
/// - `insert`: exclusive (write lock)
/// - `search_with`, `len`, `stats`: shared (read lock)
///
/// Wrap in an `Arc` to hand out to several threads.
///
/// # Example
/// ```
/// use recordindex::SharedIndex;
///
/// let index = SharedIndex::new(2).unwrap();
/// index.insert(27, "Carol");
/// let (name, visited) = index.search_with(27, |r| (r.value().copied(), r.nodes_visited()));
/// assert_eq!(name, Some("Carol"));
/// assert_eq!(visited, 1);
/// ```
#[derive(Debug)]
pub struct SharedIndex<V> {
    inner: RwLock<OrderedIndex<V>>,
}

impl<V> SharedIndex<V> {
    /// Create an empty shared index.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `min_degree` is outside `2..=usize::MAX / 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        Ok(Self::from(OrderedIndex::new(min_degree)?))
    }

    /// Insert a pair under the write lock.
    pub fn insert(&self, key: i64, value: V) {
        self.inner.write().insert(key, value);
    }

    /// Search under the read lock and map the result before it is released.
    pub fn search_with<R>(&self, key: i64, f: impl FnOnce(SearchResult<'_, V>) -> R) -> R {
        let guard = self.inner.read();
        f(guard.search(key))
    }

    /// Search and clone the value out.
    ///
    /// Returns the value (if found) and the number of nodes visited.
    pub fn get(&self, key: i64) -> (Option<V>, usize)
    where
        V: Clone,
    {
        self.search_with(key, |r| (r.value().cloned(), r.nodes_visited()))
    }

    /// Number of pairs stored.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the index holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.read().stats()
    }

    /// Acquire the read lock for several operations in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, OrderedIndex<V>> {
        self.inner.read()
    }

    /// Acquire the write lock for several operations in a row.
    pub fn write(&self) -> RwLockWriteGuard<'_, OrderedIndex<V>> {
        self.inner.write()
    }

    /// Unwrap the inner index.
    pub fn into_inner(self) -> OrderedIndex<V> {
        self.inner.into_inner()
    }
}

impl<V> From<OrderedIndex<V>> for SharedIndex<V> {
    fn from(index: OrderedIndex<V>) -> Self {
        Self {
            inner: RwLock::new(index),
        }
    }
}
