//! Index statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by an [`OrderedIndex`](crate::OrderedIndex).
///
/// All fields are atomic so that `search`, which only borrows the index
/// shared, can still count. We use `Ordering::Relaxed` throughout: counters
/// are independent and only need atomicity.
///
/// # Example
/// ```
/// use recordindex::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct IndexStats {
    /// Number of (key, value) pairs inserted.
    pub inserts: AtomicU64,

    /// Number of searches performed.
    pub searches: AtomicU64,

    /// Searches that found their key.
    pub hits: AtomicU64,

    /// Searches that reached a leaf without finding their key.
    pub misses: AtomicU64,

    /// Total nodes entered across all searches.
    pub nodes_visited: AtomicU64,

    /// Node splits, including root splits.
    pub node_splits: AtomicU64,

    /// Root splits (each one adds a level to the tree).
    pub root_splits: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            searches: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            nodes_visited: AtomicU64::new(0),
            node_splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
        }
    }

    /// Record one finished search.
    pub(crate) fn record_search(&self, found: bool, nodes_visited: usize) {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.nodes_visited.fetch_add(nodes_visited as u64, Ordering::Relaxed);
        if found {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            nodes_visited: self.nodes_visited.load(Ordering::Relaxed),
            node_splits: self.node_splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.searches.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.nodes_visited.store(0, Ordering::Relaxed);
        self.node_splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub searches: u64,
    pub hits: u64,
    pub misses: u64,
    pub nodes_visited: u64,
    pub node_splits: u64,
    pub root_splits: u64,
}

impl StatsSnapshot {
    /// Fraction of searches that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.hits as f64 / self.searches as f64
        }
    }

    /// Mean number of nodes entered per search.
    pub fn avg_nodes_visited(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.searches as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, searches: {}, hit_rate: {:.2}%, avg_visited: {:.2}, splits: {} (root: {}) }}",
            self.inserts,
            self.searches,
            self.hit_rate() * 100.0,
            self.avg_nodes_visited(),
            self.node_splits,
            self.root_splits
        )
    }
}
