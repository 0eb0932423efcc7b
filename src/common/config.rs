//! Configuration constants for recordindex.

/// Smallest minimum degree a B-tree may be built with.
///
/// With T = 1 a full node would hold a single key and a split would leave
/// both halves empty, so 2 is the floor (a 2-3-4 tree).
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Largest minimum degree a B-tree may be built with.
///
/// Node bounds are derived as 2T - 1 keys and 2T children, which must fit
/// in a `usize`.
pub const MIN_DEGREE_CEILING: usize = usize::MAX / 2;

/// Minimum degree used when the caller has no preference.
///
/// # Node Sizing
/// With T = 16:
/// - Max keys per node: 2T - 1 = 31
/// - Max children per node: 2T = 32
/// - Min keys per non-root node: T - 1 = 15
pub const DEFAULT_MIN_DEGREE: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MinDegree;

    #[test]
    fn test_default_is_valid() {
        assert!(MinDegree::new(DEFAULT_MIN_DEGREE).is_ok());
        assert!(MinDegree::new(MIN_DEGREE_FLOOR).is_ok());
        assert!(MinDegree::new(MIN_DEGREE_FLOOR - 1).is_err());
        assert!(MinDegree::new(MIN_DEGREE_CEILING).is_ok());
        assert!(MinDegree::new(MIN_DEGREE_CEILING + 1).is_err());
    }

    #[test]
    fn test_floor_node_sizes() {
        // A floor-degree tree is a 2-3-4 tree: 1..=3 keys, 2..=4 children
        assert_eq!(2 * MIN_DEGREE_FLOOR - 1, 3);
        assert_eq!(2 * MIN_DEGREE_FLOOR, 4);
    }
}
