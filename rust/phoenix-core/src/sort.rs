//! Comparison sorts over any [`RandomAccess`] range.
//!
//! Every algorithm walks the range with [`Cursor`](crate::Cursor)s and only touches elements
//! by dereferencing or swapping through them. A comparator `compare(a, b)`
//! answers "should `a` end up after `b`?": with the default
//! [`is_greater`](crate::is_greater) the result is ascending, with
//! [`is_lesser`](crate::is_lesser) descending.
//!
//! Ranges of length 0 or 1 are left untouched by every algorithm.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cursor::RandomAccess;
use crate::utility::is_greater;

// ── Sortedness ──────────────────────────────────────────────────────────

/// True when no adjacent pair is out of order under [`is_greater`].
pub fn is_sorted<R>(range: &R) -> bool
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    is_sorted_by(range, is_greater)
}

/// True when `compare(x, y)` is false for every adjacent pair `(x, y)`.
/// Empty and single-element ranges are sorted.
pub fn is_sorted_by<R, F>(range: &R, compare: F) -> bool
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
{
    let (begin, end) = (range.begin(), range.end());
    if begin == end {
        return true;
    }
    let mut it = begin;
    while it + 1 != end {
        if compare(range.item(it), range.item(it + 1)) {
            return false;
        }
        it.inc();
    }
    true
}

// ── Insertion sort ──────────────────────────────────────────────────────

/// Ascending insertion sort.
pub fn insertion_sort<R>(range: &mut R)
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    insertion_sort_by(range, is_greater)
}

/// Stable insertion sort: each element is swapped backward while its left
/// neighbour compares after it.
pub fn insertion_sort_by<R, F>(range: &mut R, compare: F)
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
{
    let (begin, end) = (range.begin(), range.end());
    if end - begin < 2 {
        return;
    }
    let mut i = begin + 1;
    while i != end {
        let mut j = i;
        while j != begin && compare(range.item(j - 1), range.item(j)) {
            range.swap_at(j, j - 1);
            j.dec();
        }
        i.inc();
    }
}

// ── Bubble sort ─────────────────────────────────────────────────────────

/// Ascending bubble sort.
pub fn bubble_sort<R>(range: &mut R)
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    bubble_sort_by(range, is_greater)
}

/// Bubble sort without early exit: each pass runs backward from the end and
/// floats the extremum down to the outer cursor.
pub fn bubble_sort_by<R, F>(range: &mut R, compare: F)
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
{
    let (begin, end) = (range.begin(), range.end());
    if end - begin < 2 {
        return;
    }
    let mut i = begin + 1;
    while i != end {
        let mut j = end - 1;
        while j != i - 1 {
            if compare(range.item(j - 1), range.item(j)) {
                range.swap_at(j, j - 1);
            }
            j.dec();
        }
        i.inc();
    }
}

// ── Selection sort ──────────────────────────────────────────────────────

/// Ascending selection sort.
pub fn selection_sort<R>(range: &mut R)
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    selection_sort_by(range, is_greater)
}

/// Selection sort: for each cursor, pick the suffix element that nothing
/// else should precede and swap it into place.
pub fn selection_sort_by<R, F>(range: &mut R, compare: F)
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
{
    let (begin, end) = (range.begin(), range.end());
    let mut i = begin;
    while i != end {
        let mut chosen = i;
        let mut j = i + 1;
        while j != end {
            if compare(range.item(chosen), range.item(j)) {
                chosen = j;
            }
            j.inc();
        }
        if chosen != i {
            range.swap_at(i, chosen);
        }
        i.inc();
    }
}

// ── Bogo sort ───────────────────────────────────────────────────────────

/// Ascending bogo sort.
pub fn bogo_sort<R>(range: &mut R)
where
    R: RandomAccess + ?Sized,
    R::Item: PartialOrd,
{
    bogo_sort_by(range, is_greater)
}

/// Bogo sort seeded from the system clock.
///
/// Expected running time is factorial in the range length and there is no
/// iteration cap; only use it on a handful of elements.
pub fn bogo_sort_by<R, F>(range: &mut R, compare: F)
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
{
    let mut rng = StdRng::seed_from_u64(clock_seed());
    bogo_sort_with_rng(range, compare, &mut rng);
}

/// Bogo sort driven by a caller-supplied random source.
///
/// Each round performs `len` swaps between two independently drawn
/// positions, then consults [`is_sorted_by`]. Returns the number of rounds.
pub fn bogo_sort_with_rng<R, F, G>(range: &mut R, compare: F, rng: &mut G) -> u64
where
    R: RandomAccess + ?Sized,
    F: Fn(&R::Item, &R::Item) -> bool,
    G: Rng + ?Sized,
{
    let len = range.len();
    let begin = range.begin();
    let mut rounds = 0u64;
    while !is_sorted_by(range, &compare) {
        for _ in 0..len {
            let a = begin + rng.gen_range(0..len);
            let b = begin + rng.gen_range(0..len);
            range.swap_at(a, b);
        }
        rounds += 1;
    }
    debug!(len, rounds, "bogo sort finished");
    rounds
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

// ── Algorithm selection ─────────────────────────────────────────────────

/// The available sort algorithms, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Insertion,
    Bubble,
    Selection,
    Bogo,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Bogo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Bogo => "bogo",
        }
    }

    /// Sort `range` with this algorithm under `compare`.
    pub fn sort_by<R, F>(self, range: &mut R, compare: F)
    where
        R: RandomAccess + ?Sized,
        F: Fn(&R::Item, &R::Item) -> bool,
    {
        match self {
            SortAlgorithm::Insertion => insertion_sort_by(range, compare),
            SortAlgorithm::Bubble => bubble_sort_by(range, compare),
            SortAlgorithm::Selection => selection_sort_by(range, compare),
            SortAlgorithm::Bogo => bogo_sort_by(range, compare),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown sort algorithm '{}' (expected insertion, bubble, selection or bogo)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utility::is_lesser;
    use crate::vector::Vector;

    const MIXED: [i32; 20] = [
        2, 8, 4, 1, 3, 6, 2, 3, 2, 5, 23, 67, 32, 643, 756, 4236, 34, 1, 3, 7,
    ];

    #[test]
    fn hand_traced_direction() {
        let mut v = Vector::from([3, 1, 2]);
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 3]);

        insertion_sort_by(&mut v, is_lesser);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn worked_example_is_ascending() {
        let mut v = Vector::from([2, 8, 4, 1, 3]);
        insertion_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 8]);
    }

    #[test]
    fn every_algorithm_sorts_both_directions() {
        for algorithm in [
            SortAlgorithm::Insertion,
            SortAlgorithm::Bubble,
            SortAlgorithm::Selection,
        ] {
            let mut v = Vector::from(MIXED);
            algorithm.sort_by(&mut v, is_greater);
            assert!(is_sorted(&v), "{} ascending: {}", algorithm, v);

            algorithm.sort_by(&mut v, is_lesser);
            assert!(is_sorted_by(&v, is_lesser), "{} descending: {}", algorithm, v);
        }
    }

    #[test]
    fn trivial_ranges_are_untouched() {
        for algorithm in SortAlgorithm::ALL {
            let mut empty: Vector<i32> = Vector::new();
            algorithm.sort_by(&mut empty, is_greater);
            assert!(empty.is_empty());
            assert!(is_sorted(&empty));

            let mut single = Vector::from([42]);
            algorithm.sort_by(&mut single, is_lesser);
            assert_eq!(single, [42]);
        }
    }

    #[test]
    fn insertion_sort_is_stable() {
        let mut pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut pairs, |a, b| a.0 > b.0);
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn sub_ranges_sort_in_isolation() {
        let mut v = Vector::from([9, 5, 4, 3, 0]);
        selection_sort(&mut v.as_mut_slice()[1..4]);
        assert_eq!(v, [9, 3, 4, 5, 0]);
    }

    #[test]
    fn bogo_sort_reaches_sorted_state() {
        let mut v = Vector::from([2, 8, 4, 1, 3]);
        bogo_sort(&mut v);
        assert!(is_sorted(&v));

        bogo_sort_by(&mut v, is_lesser);
        assert!(is_sorted_by(&v, is_lesser));
    }

    #[test]
    fn bogo_sort_with_seeded_rng_counts_rounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sorted = [1, 2, 3];
        assert_eq!(bogo_sort_with_rng(&mut sorted, is_greater, &mut rng), 0);

        let mut v = [3, 1, 2, 2];
        bogo_sort_with_rng(&mut v, is_greater, &mut rng);
        assert_eq!(v, [1, 2, 2, 3]);
    }

    #[test]
    fn is_sorted_on_fixed_data() {
        let sorted = [2, 4, 6, 8, 10, 23, 45, 89, 2354, 9999];
        let not_sorted = [3., 6., 3.15, 7.5, 2.3, 9.9, 12.3, 9., 1234., 532.];

        assert!(is_sorted_by(&sorted, is_greater));
        assert!(!is_sorted_by(&sorted, is_lesser));
        assert!(!is_sorted_by(&not_sorted, is_greater));
        assert!(!is_sorted_by(&not_sorted, is_lesser));
        assert!(is_sorted(&[7]));
        assert!(is_sorted::<[i32]>(&[]));
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<SortAlgorithm>(), Ok(algorithm));
        }
        assert_eq!("Bubble".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Bubble));
        assert!("quick".parse::<SortAlgorithm>().is_err());
    }
}
