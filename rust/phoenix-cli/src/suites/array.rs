use phoenix_check::{assert_container_equal, assert_equal, CheckReturn, CheckSuite};
use phoenix_core::{CollectionError, FixedArray};

pub fn register(suite: &mut CheckSuite<'_>) {
    suite
        .add("array::create", create)
        .add("array::copy", copy)
        .add("array::access", access);
}

fn create() -> CheckReturn {
    let a: FixedArray<i32, 10> = FixedArray::new();
    assert_equal(a.size(), 10, "array size is not 10")?;
    assert_container_equal(&a, &[0; 10], "default array is not zeroed")?;

    let b: FixedArray<i32, 10> = FixedArray::filled(3);
    assert_container_equal(&b, &[3; 10], "filled array isn't filled")?;

    let c = FixedArray::from([1, 2, 3]);
    assert_container_equal(&c, &[1, 2, 3], "array built from a list has wrong content")?;

    let d: FixedArray<i32, 5> = FixedArray::try_from_slice(&[2, 3, 4])?;
    assert_container_equal(&d, &[2, 3, 4, 0, 0], "short initializer isn't padded")?;

    assert_equal(
        FixedArray::<i32, 3>::try_from_slice(&[2, 3, 4, 5, 6]),
        Err(CollectionError::InitializerTooLarge {
            len: 5,
            capacity: 3,
        }),
        "oversized initializer was accepted",
    )?;

    let raw = ['a', 'b', 'c', 'd'];
    let e = FixedArray::from(raw);
    assert_container_equal(&raw, &e, "array built from a raw array differs")?;
    Ok(())
}

fn copy() -> CheckReturn {
    let a = FixedArray::from([1, 2, 3]);
    let b = a;
    assert_container_equal(&a, &b, "copy differs from the original")?;

    let c = FixedArray::from([2, 4, 6, 8, 10]);
    let mut d = FixedArray::from([0; 5]);
    d.clone_from(&c);
    assert_container_equal(&c, &d, "assigned copy differs from the original")?;
    Ok(())
}

fn access() -> CheckReturn {
    let mut arr = FixedArray::from(['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j']);

    assert_equal(arr[3], 'd', "unchecked read")?;
    arr[5] = 'h';
    assert_equal(arr[5], 'h', "unchecked write")?;

    assert_equal(*arr.at(2)?, 'c', "checked read")?;
    *arr.at_mut(4)? = 'y';
    assert_equal(*arr.at(4)?, 'y', "checked write")?;

    assert_equal(
        arr.at(10).is_err() && arr.at(15).is_err(),
        true,
        "checked access past the end succeeded",
    )?;
    Ok(())
}
