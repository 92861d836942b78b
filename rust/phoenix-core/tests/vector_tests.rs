//! Vector behaviour through the public API.

use std::num::NonZeroUsize;

use phoenix_core::{
    insertion_sort, is_sorted, CollectionError, Cursor, FixedArray, RandomAccess, Vector,
    VectorConfig,
};

fn growth(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero growth")
}

// ─── construction ───

#[test]
fn create_vector() {
    let empty: Vector<i32> = Vector::new();
    assert_eq!(empty.size(), 0);

    let sized: Vector<i32> = Vector::with_size(10);
    assert_eq!(sized.size(), 10);

    let data = [1, 2, 3];
    let listed = Vector::from_slice(&data);
    assert_eq!(listed.size(), data.len());
    assert_eq!(listed, data.to_vec());
}

#[test]
fn with_config_uses_growth_increment() {
    let config = VectorConfig {
        growth_increment: growth(3),
    };
    let mut v = Vector::with_config(&config);
    v.append('a');
    assert_eq!(v.capacity(), 3);
}

// ─── growth ───

#[test]
fn capacity_follows_linear_growth() {
    for g in [1usize, 2, 4, 7, 16] {
        let mut v = Vector::with_growth(growth(g));
        for k in 1..=40usize {
            v.append(k);
            assert_eq!(v.size(), k);
            assert_eq!(v.capacity(), k.div_ceil(g) * g, "g = {}, k = {}", g, k);
        }
    }
}

#[test]
fn filled_vectors_take_a_configured_increment() {
    let mut sized = Vector::with_value(3, 7).with_growth_increment(growth(4));
    assert_eq!(sized.capacity(), 3);
    sized.append(8);
    assert_eq!(sized.capacity(), 7);
    assert_eq!(sized.growth_increment(), 4);

    let mut copy = sized.clone();
    assert_eq!(copy.capacity(), 4);
    copy.append(9);
    assert_eq!(copy.capacity(), 8);

    let mut collected: Vector<u8> = (0..5).collect();
    collected = collected.with_growth_increment(growth(2));
    collected.append(5);
    assert_eq!((collected.size(), collected.capacity()), (6, 7));
}

#[test]
fn elements_survive_reallocation() {
    let mut v = Vector::with_growth(growth(2));
    for word in ["one", "two", "three", "four", "five"] {
        v.append(word.to_string());
    }
    let expected: Vec<String> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(v, expected);
    assert_eq!(v.capacity(), 6);
}

// ─── copy and move ───

#[test]
fn copy_is_deep_and_distinct() {
    let original = Vector::from([1, 2, 3, 4]);
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_ne!(copy.as_slice().as_ptr(), original.as_slice().as_ptr());

    copy[0] = 100;
    assert_eq!(original[0], 1);
}

#[test]
fn clone_from_replaces_contents() {
    let source = Vector::from([1, 2, 3, 4, 5, 6, 7, 8]);
    let mut target = Vector::from([9]);
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 8);
}

#[test]
fn move_transfers_everything() {
    let data = vec![6, 3, 2, 45, 664];
    let mut source = Vector::from(data.clone());
    let target = source.take();

    assert_eq!(source.size(), 0);
    assert_eq!(source.capacity(), 0);
    assert_eq!(target, data);

    // The emptied source is still usable.
    source.append(1);
    assert_eq!(source, [1]);
}

// ─── removal ───

#[test]
fn remove_last_returns_elements_in_reverse() {
    let mut v = Vector::from(['x', 'y', 'z']);
    let capacity = v.capacity();
    assert_eq!(v.remove_last(), Ok('z'));
    assert_eq!(v.remove_last(), Ok('y'));
    assert_eq!(v.remove_last(), Ok('x'));
    assert_eq!(v.remove_last(), Err(CollectionError::EmptyContainer));
    assert_eq!(v.capacity(), capacity);
}

// ─── checked access ───

#[test]
fn at_fails_for_every_index_past_size() {
    for size in 0..5usize {
        let v: Vector<u8> = Vector::with_size(size);
        for index in size..size + 3 {
            assert_eq!(
                v.at(index),
                Err(CollectionError::IndexOutOfRange { index, size })
            );
        }
    }
}

// ─── cursors ───

#[test]
fn cursor_walk_matches_indexing() {
    let mut v = Vector::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

    assert_eq!(v.begin(), Cursor::at(0));
    assert_eq!(v.end(), Cursor::at(10));
    assert_ne!(v.begin(), v.end());
    assert_eq!(v.begin() + 2, v.end() - 8);

    let mut it = v.begin() + 3;
    assert_eq!(v[it.inc()], v[4]);
    assert_eq!(v[it.dec()], v[3]);
    assert_eq!(v[it.post_inc()], v[3]);
    assert_eq!(v[it], v[4]);
    assert_eq!(v[it.post_dec()], v[4]);
    assert_eq!(v[it], v[3]);

    let mut it = v.end();
    it -= 4;
    assert_eq!(*v.item(it), 7);
    it += 2;
    assert_eq!(*v.item(it), 9);

    for e in &mut v {
        *e += 1;
    }
    let mut i = 0;
    let mut it = v.begin();
    while it != v.end() {
        assert_eq!(v[it], v[i]);
        assert!(std::ptr::eq(v.item(it), &v[i]));
        it.inc();
        i += 1;
    }
    assert_eq!(i, 10);
}

#[test]
fn sorting_through_the_vector() {
    let mut v = Vector::from([2, 8, 4, 1, 3]);
    insertion_sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 8]);
    assert!(is_sorted(&v));
}

#[test]
fn fixed_array_shares_the_cursor_contract() {
    let mut a = FixedArray::from([5, 4, 3]);
    let (begin, end) = (a.begin(), a.end());
    assert_eq!(end - begin, 3);
    a.swap_at(begin, end - 1);
    assert_eq!(a.into_inner(), [3, 4, 5]);
}
