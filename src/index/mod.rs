//! Index structures.
//!
//! - [`btree`] - In-memory B-tree over `i64` keys

pub mod btree;
