//! Property tests for the ordered index.
//!
//! Random degrees and insertion sequences, checked against a stable sort
//! of the same inputs.

use proptest::prelude::*;
use recordindex::OrderedIndex;

/// Insert sequences over a narrow key range so duplicates are common.
fn inserts() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Structure holds after every single insert.
    #[test]
    fn invariants_hold_after_each_insert(t in 2usize..7, keys in inserts()) {
        let mut index = OrderedIndex::new(t).unwrap();
        for (seq, key) in keys.into_iter().enumerate() {
            index.insert(key, seq);
            prop_assert_eq!(index.check_invariants(), Ok(()));
        }
    }

    /// In-order traversal equals a stable sort of the inputs.
    #[test]
    fn traversal_is_stable_sort(t in 2usize..7, keys in inserts()) {
        let mut index = OrderedIndex::new(t).unwrap();
        let mut expected: Vec<(i64, usize)> = Vec::new();
        for (seq, key) in keys.into_iter().enumerate() {
            index.insert(key, seq);
            expected.push((key, seq));
        }
        expected.sort_by_key(|&(k, _)| k);

        let got: Vec<(i64, usize)> = index.iter().map(|(k, v)| (k, *v)).collect();
        prop_assert_eq!(got, expected);
    }

    /// Unique keys are all found with their value; others are not.
    #[test]
    fn search_finds_exactly_inserted_keys(
        t in 2usize..7,
        keys in prop::collection::btree_set(-1000i64..1000, 0..200),
        probes in prop::collection::vec(-1100i64..1100, 0..50),
    ) {
        let mut index = OrderedIndex::new(t).unwrap();
        for &key in &keys {
            index.insert(key, key.wrapping_mul(3));
        }

        for &key in &keys {
            let expected = key.wrapping_mul(3);
            let r = index.search(key);
            prop_assert!(r.found());
            prop_assert_eq!(r.value(), Some(&expected));
        }
        for probe in probes {
            let r = index.search(probe);
            prop_assert_eq!(r.found(), keys.contains(&probe));
        }
    }

    /// nodes_visited is between 1 and height + 1, and misses always reach a leaf.
    #[test]
    fn nodes_visited_bounded_by_height(
        t in 2usize..7,
        keys in inserts(),
        probes in prop::collection::vec(-60i64..60, 1..40),
    ) {
        let mut index = OrderedIndex::new(t).unwrap();
        for key in keys {
            index.insert(key, ());
        }

        for probe in probes {
            let r = index.search(probe);
            prop_assert!(r.nodes_visited() >= 1);
            prop_assert!(r.nodes_visited() <= index.height() + 1);
            if !r.found() {
                prop_assert_eq!(r.nodes_visited(), index.height() + 1);
            }
        }
    }

    /// Every rejected degree yields an error and never an index.
    #[test]
    fn small_degrees_rejected(t in 0usize..2) {
        prop_assert!(OrderedIndex::<()>::new(t).is_err());
    }
}
