use phoenix_check::{assert_equal, CheckReturn, CheckSuite};
use phoenix_core::{
    bogo_sort, bogo_sort_by, bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by,
    is_lesser, is_sorted, is_sorted_by, selection_sort, selection_sort_by, Vector,
};

const MIXED: [i32; 20] = [
    2, 8, 4, 1, 3, 6, 2, 3, 2, 5, 23, 67, 32, 643, 756, 4236, 34, 1, 3, 7,
];

pub fn register(suite: &mut CheckSuite<'_>) {
    suite
        .add("sort::insertion", insertion)
        .add("sort::bubble", bubble)
        .add("sort::selection", selection)
        .add("sort::bogo", bogo);
}

fn insertion() -> CheckReturn {
    let mut a = Vector::from(MIXED);
    insertion_sort(&mut a);
    assert_equal(is_sorted(&a), true, "insertion sort left the vector unsorted")?;

    insertion_sort_by(&mut a, is_lesser);
    assert_equal(is_sorted_by(&a, is_lesser), true, "descending insertion sort failed")?;
    Ok(())
}

fn bubble() -> CheckReturn {
    let mut a = Vector::from(MIXED);
    bubble_sort(&mut a);
    assert_equal(is_sorted(&a), true, "bubble sort left the vector unsorted")?;

    bubble_sort_by(&mut a, is_lesser);
    assert_equal(is_sorted_by(&a, is_lesser), true, "descending bubble sort failed")?;
    Ok(())
}

fn selection() -> CheckReturn {
    let mut a = Vector::from(MIXED);
    selection_sort(&mut a);
    assert_equal(is_sorted(&a), true, "selection sort left the vector unsorted")?;

    selection_sort_by(&mut a, is_lesser);
    assert_equal(is_sorted_by(&a, is_lesser), true, "descending selection sort failed")?;
    Ok(())
}

fn bogo() -> CheckReturn {
    let mut a = Vector::from([2, 8, 4, 1, 3]);
    bogo_sort(&mut a);
    assert_equal(is_sorted(&a), true, "bogo sort left the vector unsorted")?;

    bogo_sort_by(&mut a, is_lesser);
    assert_equal(is_sorted_by(&a, is_lesser), true, "descending bogo sort failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoenix_check::RunOptions;

    #[test]
    fn each_algorithm_check_passes_in_both_directions() {
        for check in [insertion, bubble, selection, bogo] {
            assert!(check().is_ok());
        }
    }

    #[test]
    fn descending_bubble_sort_matches_reverse_order() {
        let mut a = Vector::from(MIXED);
        bubble_sort_by(&mut a, is_lesser);
        let mut expected = MIXED.to_vec();
        expected.sort_by(|x, y| y.cmp(x));
        assert_eq!(a, expected);
    }

    #[test]
    fn registers_one_check_per_algorithm() {
        let mut suite = CheckSuite::new("sort");
        register(&mut suite);
        let mut sink = Vec::new();
        let summary = suite.run(&mut sink, &RunOptions::default()).unwrap();
        assert_eq!((summary.total, summary.passed), (4, 4));
    }
}
