//! Structural invariant checks.
//!
//! [`OrderedIndex::check_invariants`] walks the whole tree and reports the
//! first broken B-tree property it finds. It is a diagnostic used by tests;
//! insert and search never call it.

use thiserror::Error;

use crate::common::MinDegree;
use crate::index::btree::{Node, OrderedIndex};

/// A broken structural property, found by
/// [`OrderedIndex::check_invariants`].
///
/// Depths count edges from the root (the root is at depth 0).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("node at depth {depth} holds {keys} keys, above the maximum of {max}")]
    Overfull { depth: usize, keys: usize, max: usize },

    #[error("non-root node at depth {depth} holds {keys} keys, below the minimum of {min}")]
    Underfull { depth: usize, keys: usize, min: usize },

    #[error("node at depth {depth} has {keys} keys but {values} values")]
    ValueCount {
        depth: usize,
        keys: usize,
        values: usize,
    },

    #[error("node at depth {depth} has {children} children, expected {expected}")]
    ChildCount {
        depth: usize,
        children: usize,
        expected: usize,
    },

    #[error("keys out of order at depth {depth}: {prev} before {next}")]
    Unsorted { depth: usize, prev: i64, next: i64 },

    #[error("key {key} at depth {depth} lies outside its separators [{low:?}, {high:?}]")]
    OutOfRange {
        depth: usize,
        key: i64,
        low: Option<i64>,
        high: Option<i64>,
    },

    #[error("leaf at depth {depth}, but other leaves are at depth {expected}")]
    UnevenLeaves { depth: usize, expected: usize },

    #[error("tree holds {counted} pairs but the index recorded {recorded}")]
    LengthMismatch { counted: usize, recorded: usize },

    #[error("tree height is {measured} but the index recorded {recorded}")]
    HeightMismatch { measured: usize, recorded: usize },
}

/// Running state of one validation walk.
struct Walk {
    t: MinDegree,
    leaf_depth: Option<usize>,
    counted: usize,
}

impl Walk {
    fn check<V>(
        &mut self,
        node: &Node<V>,
        depth: usize,
        low: Option<i64>,
        high: Option<i64>,
    ) -> Result<(), InvariantViolation> {
        let keys = node.keys.len();

        if keys > self.t.max_keys() {
            return Err(InvariantViolation::Overfull {
                depth,
                keys,
                max: self.t.max_keys(),
            });
        }
        if depth > 0 && keys < self.t.min_keys() {
            return Err(InvariantViolation::Underfull {
                depth,
                keys,
                min: self.t.min_keys(),
            });
        }
        if node.values.len() != keys {
            return Err(InvariantViolation::ValueCount {
                depth,
                keys,
                values: node.values.len(),
            });
        }

        if let Some(w) = node.keys.windows(2).find(|w| w[0] > w[1]) {
            return Err(InvariantViolation::Unsorted {
                depth,
                prev: w[0],
                next: w[1],
            });
        }

        // Duplicates may sit on either side of an equal separator
        let in_range = |k: i64| low.map_or(true, |lo| lo <= k) && high.map_or(true, |hi| k <= hi);
        if let Some(&key) = node.keys.iter().find(|&&k| !in_range(k)) {
            return Err(InvariantViolation::OutOfRange {
                depth,
                key,
                low,
                high,
            });
        }

        self.counted += keys;

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(InvariantViolation::ChildCount {
                    depth,
                    children: node.children.len(),
                    expected: 0,
                });
            }
            match self.leaf_depth {
                None => self.leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(InvariantViolation::UnevenLeaves { depth, expected });
                }
                Some(_) => {}
            }
            return Ok(());
        }

        if node.children.len() != keys + 1 {
            return Err(InvariantViolation::ChildCount {
                depth,
                children: node.children.len(),
                expected: keys + 1,
            });
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_low = if i == 0 { low } else { Some(node.keys[i - 1]) };
            let child_high = if i == keys { high } else { Some(node.keys[i]) };
            self.check(child, depth + 1, child_low, child_high)?;
        }
        Ok(())
    }
}

impl<V> OrderedIndex<V> {
    /// Verify every structural B-tree property.
    ///
    /// Checks that each node holds at most 2T - 1 keys (and, below the
    /// root, at least T - 1), keys ascend within and across nodes, each
    /// internal node has one more child than keys, and all leaves sit at
    /// the same depth. Also cross-checks the recorded length and height.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut walk = Walk {
            t: self.min_degree(),
            leaf_depth: None,
            counted: 0,
        };
        walk.check(self.root(), 0, None, None)?;

        if walk.counted != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                counted: walk.counted,
                recorded: self.len(),
            });
        }
        let measured = walk.leaf_depth.unwrap_or(0);
        if measured != self.height() {
            return Err(InvariantViolation::HeightMismatch {
                measured,
                recorded: self.height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(keys: &[i64]) -> Node<()> {
        let mut node = Node::leaf();
        node.keys = keys.to_vec();
        node.values = vec![(); keys.len()];
        node
    }

    fn walk(t: usize) -> Walk {
        Walk {
            t: MinDegree::new(t).unwrap(),
            leaf_depth: None,
            counted: 0,
        }
    }

    #[test]
    fn test_valid_tree_passes() {
        let mut index = OrderedIndex::new(2).unwrap();
        for k in (0..100).rev() {
            index.insert(k, ());
            assert_eq!(index.check_invariants(), Ok(()));
        }
    }

    #[test]
    fn test_detects_overfull() {
        let node = leaf(&[1, 2, 3, 4]);
        assert_eq!(
            walk(2).check(&node, 0, None, None),
            Err(InvariantViolation::Overfull {
                depth: 0,
                keys: 4,
                max: 3
            })
        );
    }

    #[test]
    fn test_detects_underfull_below_root() {
        let node = leaf(&[1]);
        assert!(walk(3).check(&node, 0, None, None).is_ok());
        assert_eq!(
            walk(3).check(&node, 1, None, None),
            Err(InvariantViolation::Underfull {
                depth: 1,
                keys: 1,
                min: 2
            })
        );
    }

    #[test]
    fn test_detects_unsorted() {
        let node = leaf(&[1, 3, 2]);
        assert_eq!(
            walk(2).check(&node, 0, None, None),
            Err(InvariantViolation::Unsorted {
                depth: 0,
                prev: 3,
                next: 2
            })
        );
    }

    #[test]
    fn test_detects_bad_child_count_and_range() {
        let mut root = Node::internal();
        root.keys = vec![10];
        root.values = vec![()];
        root.children = vec![leaf(&[5])];
        assert_eq!(
            walk(2).check(&root, 0, None, None),
            Err(InvariantViolation::ChildCount {
                depth: 0,
                children: 1,
                expected: 2
            })
        );

        root.children.push(leaf(&[7]));
        assert_eq!(
            walk(2).check(&root, 0, None, None),
            Err(InvariantViolation::OutOfRange {
                depth: 1,
                key: 7,
                low: Some(10),
                high: None
            })
        );
    }

    #[test]
    fn test_detects_uneven_leaves() {
        let mut inner = Node::internal();
        inner.keys = vec![2];
        inner.values = vec![()];
        inner.children = vec![leaf(&[1]), leaf(&[3])];

        let mut root = Node::internal();
        root.keys = vec![5];
        root.values = vec![()];
        root.children = vec![inner, leaf(&[6])];

        assert_eq!(
            walk(2).check(&root, 0, None, None),
            Err(InvariantViolation::UnevenLeaves {
                depth: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_violation_display() {
        let v = InvariantViolation::ChildCount {
            depth: 1,
            children: 3,
            expected: 2,
        };
        assert_eq!(v.to_string(), "node at depth 1 has 3 children, expected 2");
    }
}
