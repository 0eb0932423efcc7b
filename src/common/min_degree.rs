//! Minimum degree (T) of a B-tree.

use std::fmt;

use crate::common::config::{DEFAULT_MIN_DEGREE, MIN_DEGREE_CEILING, MIN_DEGREE_FLOOR};
use crate::common::{Error, Result};

/// The validated minimum degree of a B-tree.
///
/// Every non-root node holds between `T - 1` and `2T - 1` keys, and every
/// internal node has between `T` and `2T` children. A `MinDegree` can only
/// be built through [`MinDegree::new`], so holding one means `T >= 2` and
/// that `2T` fits in a `usize`.
///
/// # Example
/// ```
/// use recordindex::MinDegree;
///
/// let t = MinDegree::new(3).unwrap();
/// assert_eq!(t.max_keys(), 5);
/// assert_eq!(t.min_keys(), 2);
/// assert!(MinDegree::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinDegree(usize);

impl MinDegree {
    /// Validate and wrap a minimum degree.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `t < 2` or `t > usize::MAX / 2`.
    pub fn new(t: usize) -> Result<Self> {
        if !(MIN_DEGREE_FLOOR..=MIN_DEGREE_CEILING).contains(&t) {
            return Err(Error::InvalidConfig {
                min_degree: t,
                floor: MIN_DEGREE_FLOOR,
                ceiling: MIN_DEGREE_CEILING,
            });
        }
        Ok(MinDegree(t))
    }

    /// The raw value of T.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }

    /// Keys held by a full node (2T - 1). Reaching this triggers a split.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.0 - 1
    }

    /// Fewest keys a non-root node may hold (T - 1).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.0 - 1
    }

    /// Most children an internal node may have (2T).
    #[inline]
    pub fn max_children(&self) -> usize {
        2 * self.0
    }

    /// Position of the median entry in a full node (T - 1, 0-indexed).
    #[inline]
    pub fn median(&self) -> usize {
        self.0 - 1
    }
}

impl Default for MinDegree {
    fn default() -> Self {
        MinDegree(DEFAULT_MIN_DEGREE)
    }
}

impl fmt::Display for MinDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T={}", self.0)
    }
}
