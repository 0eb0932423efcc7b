//! B-tree index.
//!
//! # Components
//! - [`OrderedIndex`] - The B-tree: proactive-split insert and counted search
//! - [`Node`] - Read-only view of one tree node
//! - [`SearchResult`] - Value (if found) plus nodes visited
//! - [`Iter`] - In-order traversal
//! - [`InvariantViolation`] - Report from [`OrderedIndex::check_invariants`]
//! - [`IndexStats`] - Operation counters
//! - [`SharedIndex`] - Read-write locked wrapper for shared use

mod iter;
mod node;
mod search;
mod shared;
mod stats;
mod tree;
mod validate;

pub use iter::Iter;
pub use node::Node;
pub use search::SearchResult;
pub use shared::SharedIndex;
pub use stats::{IndexStats, StatsSnapshot};
pub use tree::OrderedIndex;
pub use validate::InvariantViolation;
