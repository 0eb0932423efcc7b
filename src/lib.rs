//! recordindex - An in-memory B-tree index over integer keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          recordindex                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          SharedIndex (optional, caller side)             │   │
//! │  │         parking_lot::RwLock<OrderedIndex<V>>             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              OrderedIndex<V> (index/btree/)              │   │
//! │  │   insert: proactive split on the way down (2T-1 full)    │   │
//! │  │   search: (value?, nodes_visited)                        │   │
//! │  │   iter / check_invariants / stats                        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                     Node<V> tree                         │   │
//! │  │      keys: Vec<i64>  values: Vec<V>  children: Vec<Node>  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (MinDegree, Error, config)
//! - [`index`] - Index structures (B-tree)
//! - [`record`] - Payload record type
//!
//! # Quick Start
//! ```
//! use recordindex::{OrderedIndex, Record};
//!
//! let mut index = OrderedIndex::new(2).unwrap();
//! for r in [
//!     Record::new(1034, "Alice", 23),
//!     Record::new(1005, "David", 23),
//!     Record::new(1089, "Carol", 27),
//!     Record::new(1012, "Bob", 34),
//! ] {
//!     index.insert(r.age_key(), r);
//! }
//!
//! let result = index.search(27);
//! assert_eq!(result.value().map(|r| r.name.as_str()), Some("Carol"));
//! assert_eq!(result.nodes_visited(), 2);
//! ```

pub mod common;
pub mod index;
pub mod record;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_CEILING, MIN_DEGREE_FLOOR};
pub use common::{Error, MinDegree, Result};

pub use index::btree::{
    IndexStats, InvariantViolation, Iter, Node, OrderedIndex, SearchResult, SharedIndex,
    StatsSnapshot,
};
pub use record::Record;
