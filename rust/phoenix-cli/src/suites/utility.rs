use phoenix_check::{assert_equal, CheckReturn, CheckSuite};
use phoenix_core::{greater, is_greater, is_lesser, is_sorted_by, lesser, swap, FixedArray};

pub fn register(suite: &mut CheckSuite<'_>) {
    suite
        .add("utility::greater", check_greater)
        .add("utility::lesser", check_lesser)
        .add("utility::swap", check_swap)
        .add("utility::is_sorted", check_is_sorted);
}

fn check_greater() -> CheckReturn {
    assert_equal(greater(2, 3), 3, "is 2 greater than 3?")?;
    assert_equal(greater(4, 2), 4, "is 2 greater than 4?")?;
    assert_equal(greater(3, 3), 3, "equal values")?;
    Ok(())
}

fn check_lesser() -> CheckReturn {
    assert_equal(lesser(2, 3), 2, "is 3 lesser than 2?")?;
    assert_equal(lesser(4, 2), 2, "is 4 lesser than 2?")?;
    assert_equal(lesser(3, 3), 3, "equal values")?;
    Ok(())
}

fn check_swap() -> CheckReturn {
    let (mut x, mut y) = (3, 5);
    swap(&mut x, &mut y);
    assert_equal(x, 5, "values were not swapped")?;
    assert_equal(y, 3, "values were not swapped")?;
    Ok(())
}

fn check_is_sorted() -> CheckReturn {
    let sorted = FixedArray::from([2, 4, 6, 8, 10, 23, 45, 89, 2354, 9999]);
    let not_sorted = FixedArray::from([3., 6., 3.15, 7.5, 2.3, 9.9, 12.3, 9., 1234., 532.]);

    assert_equal(
        is_sorted_by(&sorted, is_greater),
        true,
        "sorted array is not sorted?",
    )?;
    assert_equal(
        is_sorted_by(&sorted, is_lesser),
        false,
        "sorted array is sorted the reverse way?",
    )?;
    assert_equal(
        is_sorted_by(&not_sorted, is_greater),
        false,
        "unsorted array is sorted ascending",
    )?;
    assert_equal(
        is_sorted_by(&not_sorted, is_lesser),
        false,
        "unsorted array is sorted descending",
    )?;
    Ok(())
}
