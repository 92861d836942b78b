//! Property tests shared by every sort algorithm.

use phoenix_core::{is_greater, is_lesser, is_sorted_by, SortAlgorithm, Vector};
use proptest::prelude::*;

/// The deterministic algorithms; bogo sort gets its own, smaller fixtures.
const ORDERED_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::Insertion,
    SortAlgorithm::Bubble,
    SortAlgorithm::Selection,
];

fn multiset(items: &[i32]) -> Vec<i32> {
    let mut sorted = items.to_vec();
    sorted.sort_unstable();
    sorted
}

proptest! {
    /// Sorting under `is_greater` yields a range the oracle accepts.
    #[test]
    fn ascending_results_pass_the_oracle(items in prop::collection::vec(-50i32..50, 0..40)) {
        for algorithm in ORDERED_ALGORITHMS {
            let mut v = Vector::from(items.clone());
            algorithm.sort_by(&mut v, is_greater);
            prop_assert!(is_sorted_by(&v, is_greater), "{} left {}", algorithm, v);
        }
    }

    /// Sorting under `is_lesser` yields a descending range.
    #[test]
    fn descending_results_pass_the_oracle(items in prop::collection::vec(-50i32..50, 0..40)) {
        for algorithm in ORDERED_ALGORITHMS {
            let mut v = Vector::from(items.clone());
            algorithm.sort_by(&mut v, is_lesser);
            prop_assert!(is_sorted_by(&v, is_lesser), "{} left {}", algorithm, v);
        }
    }

    /// Sorting permutes; nothing is added, dropped or altered.
    #[test]
    fn sorting_preserves_the_multiset(items in prop::collection::vec(0i32..8, 0..30)) {
        for algorithm in ORDERED_ALGORITHMS {
            let mut v = Vector::from(items.clone());
            algorithm.sort_by(&mut v, is_lesser);
            prop_assert_eq!(multiset(&v), multiset(&items));
        }
    }

    /// All deterministic algorithms agree with the standard library.
    #[test]
    fn matches_std_sort(items in prop::collection::vec(any::<i16>(), 0..30)) {
        let mut expected = items.clone();
        expected.sort();
        for algorithm in ORDERED_ALGORITHMS {
            let mut actual = items.clone();
            algorithm.sort_by(&mut actual, is_greater);
            prop_assert_eq!(&actual, &expected);
        }
    }

    /// Bogo sort terminates on tiny inputs and only permutes.
    #[test]
    fn bogo_sort_on_tiny_inputs(items in prop::collection::vec(0i32..5, 0..5)) {
        let mut v = Vector::from(items.clone());
        SortAlgorithm::Bogo.sort_by(&mut v, is_greater);
        prop_assert!(is_sorted_by(&v, is_greater));
        prop_assert_eq!(multiset(&v), multiset(&items));
    }
}
