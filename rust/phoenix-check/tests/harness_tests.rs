use phoenix_check::{
    assert_container_equal, assert_container_not_equal, assert_equal, run_named_check,
    CheckOutcome, CheckSuite, RunOptions,
};
use phoenix_core::{insertion_sort, CollectionError, FixedArray, Vector};

#[test]
fn containers_compare_through_slices() {
    let v = Vector::from([1, 2, 3]);
    let a = FixedArray::from([1, 2, 3]);
    assert!(assert_container_equal(&v, &a, "same contents").is_ok());
    assert!(assert_container_not_equal(&v, &[1, 2], "length differs").is_ok());
}

#[test]
fn collection_errors_are_reported_as_non_check_errors() {
    let mut sink = Vec::new();
    let outcome = run_named_check(
        || {
            let v: Vector<i32> = Vector::new();
            v.at(0)?;
            Ok(())
        },
        "empty_at",
        &mut sink,
    )
    .unwrap();

    let expected = CollectionError::out_of_range(0, 0).to_string();
    assert_eq!(outcome, CheckOutcome::Errored(expected.clone()));
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        format!("<empty_at> non-check error occurred: {}\n", expected)
    );
}

#[test]
fn suite_runs_checks_over_sorted_vectors() {
    let mut suite = CheckSuite::new("sorting");
    suite.add("insertion", || {
        let mut v = Vector::from([2, 8, 4, 1, 3]);
        insertion_sort(&mut v);
        assert_container_equal(&v, &[1, 2, 3, 4, 8], "ascending")?;
        Ok(())
    });
    suite.add("size", || {
        let v = Vector::from([5, 6]);
        assert_equal(v.size(), 3, "deliberately wrong")?;
        Ok(())
    });

    let mut sink = Vec::new();
    let summary = suite.run(&mut sink, &RunOptions::default()).unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 1);

    let text = String::from_utf8(sink).unwrap();
    assert!(text.contains("<size> <check::equal failed!> deliberately wrong [first: 2] [second: 3]"));
}
