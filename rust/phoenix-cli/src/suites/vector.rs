use std::num::NonZeroUsize;

use phoenix_check::{
    assert_container_equal, assert_equal, assert_not_equal, CheckReturn, CheckSuite,
};
use phoenix_core::{CollectionError, Cursor, Vector};

pub fn register(suite: &mut CheckSuite<'_>) {
    suite
        .add("vector::create", create)
        .add("vector::cursor", cursor)
        .add("vector::copy_and_move", copy_and_move)
        .add("vector::append_remove", append_remove)
        .add("vector::access", access);
}

fn create() -> CheckReturn {
    let empty: Vector<i32> = Vector::new();
    assert_equal(empty.size(), 0, "default-constructed vector isn't empty")?;

    let sized: Vector<i32> = Vector::with_size(10);
    assert_equal(sized.size(), 10, "vector constructed with size 10 has another size")?;

    let data = vec![1, 2, 3];
    let listed = Vector::from_slice(&data);
    assert_equal(listed.size(), data.len(), "vector built from a list has a different size")?;
    assert_container_equal(&listed, &data, "vector built from a list differs from the list")?;
    Ok(())
}

fn cursor() -> CheckReturn {
    let mut a: Vector<i32> = (1..=10).collect();

    assert_equal(a.begin(), Cursor::at(0), "begin is not the first slot")?;
    assert_equal(a.end(), Cursor::at(10), "end is not one past the last slot")?;
    assert_equal(a[a.begin()], a[0], "begin doesn't dereference to the first element")?;

    let mut it = a.begin() + 3;
    assert_equal(a[it.inc()], a[4], "pre-increment")?;
    assert_equal(a[it.dec()], a[3], "pre-decrement")?;
    assert_equal(a[it.post_inc()], a[3], "post-increment yields the old position")?;
    assert_equal(a[it], a[4], "post-increment moves forward")?;
    assert_equal(a[it.post_dec()], a[4], "post-decrement yields the old position")?;
    assert_equal(a[it], a[3], "post-decrement moves back")?;

    assert_equal(a[a.begin() + 3], a[3], "offset add")?;
    assert_equal(a[a.end() - 1], a[9], "offset subtract")?;

    let mut it = a.begin();
    it += 3;
    assert_equal(a[it], a[3], "compound add")?;
    it -= 2;
    assert_equal(a[it], a[1], "compound subtract")?;

    assert_not_equal(a.begin(), a.end(), "begin equals end on a non-empty vector")?;
    assert_equal(a.begin() + 2, a.end() - 8, "equal positions compare unequal")?;

    let mut it = a.begin();
    while it != a.end() {
        a[it] += 1;
        it.inc();
    }
    for e in &mut a {
        *e += 1;
    }
    assert_container_equal(&a, &[3, 4, 5, 6, 7, 8, 9, 10, 11, 12], "iteration missed elements")?;

    for (i, e) in a.iter().enumerate() {
        assert_equal(
            e as *const i32,
            &a[i] as *const i32,
            "iteration yields a reference to another slot",
        )?;
    }
    Ok(())
}

fn copy_and_move() -> CheckReturn {
    let original = Vector::from([1, 2, 3, 4]);
    let copy = original.clone();
    assert_container_equal(&original, &copy, "copy differs from the original")?;
    assert_not_equal(
        original.as_slice().as_ptr(),
        copy.as_slice().as_ptr(),
        "copy shares storage with the original",
    )?;

    let data = [2, 4, 6, 8, 10];
    let mut source = Vector::from(data);
    let moved = source.take();
    assert_equal(source.size(), 0, "moved-from vector is not empty")?;
    assert_equal(source.capacity(), 0, "moved-from vector still owns storage")?;
    assert_container_equal(&moved, &data, "moved vector lost its elements")?;

    let mut target = Vector::from([9, 9]);
    target.clone_from(&moved);
    assert_container_equal(&target, &moved, "assigned copy differs from its source")?;
    Ok(())
}

fn append_remove() -> CheckReturn {
    let growth = NonZeroUsize::new(4).ok_or("growth increment must be positive")?;
    let mut v = Vector::with_growth(growth);

    v.append(10);
    v.append(20);
    v.append(30);
    assert_equal(v.size(), 3, "size after three appends")?;
    assert_equal(v.capacity(), 4, "capacity after three appends with increment 4")?;

    v.append(20);
    assert_equal(v.size(), 4, "size after four appends")?;
    assert_equal(v.capacity(), 4, "capacity after four appends with increment 4")?;

    v.append(10);
    assert_equal(v.size(), 5, "size after five appends")?;
    assert_equal(v.capacity(), 8, "capacity after five appends with increment 4")?;

    assert_equal(v.remove_last()?, 10, "removed element is not the last appended")?;
    assert_equal(v.size(), 4, "size after removing")?;
    assert_equal(v.capacity(), 8, "removing changed the capacity")?;

    v.resize(0);
    assert_equal(
        v.remove_last(),
        Err(CollectionError::EmptyContainer),
        "removed from an empty vector",
    )?;
    Ok(())
}

fn access() -> CheckReturn {
    let mut v = Vector::from(['a', 'b', 'c', 'd', 'e']);

    assert_equal(v[0], 'a', "unchecked read")?;
    v[3] = 'q';
    assert_equal(v[3], 'q', "unchecked write")?;

    assert_equal(*v.at(1)?, 'b', "checked read")?;
    *v.at_mut(4)? = 'o';
    assert_equal(*v.at(4)?, 'o', "checked write")?;

    assert_equal(
        v.at(10),
        Err(CollectionError::out_of_range(10, 5)),
        "checked access past the end succeeded",
    )?;
    Ok(())
}
