//! Comparator primitives and small generic helpers.
//!
//! The `is_*` predicates share the `fn(&T, &T) -> bool` shape so they can be
//! handed to the sort algorithms by name.

use std::fmt;

/// Two values of possibly different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}

/// Returns the greater of two values. Ties yield `second`.
pub fn greater<T: PartialOrd>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

/// Returns the lesser of two values. Ties yield `second`.
pub fn lesser<T: PartialOrd>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

/// `first > second`. The default comparator of every sort.
pub fn is_greater<T: PartialOrd + ?Sized>(first: &T, second: &T) -> bool {
    first > second
}

pub fn is_greater_or_equal<T: PartialOrd + ?Sized>(first: &T, second: &T) -> bool {
    first >= second
}

/// `first < second`. Sorts by this comparator produce descending order.
pub fn is_lesser<T: PartialOrd + ?Sized>(first: &T, second: &T) -> bool {
    first < second
}

pub fn is_lesser_or_equal<T: PartialOrd + ?Sized>(first: &T, second: &T) -> bool {
    first <= second
}

pub fn is_equal<T: PartialEq + ?Sized>(first: &T, second: &T) -> bool {
    first == second
}

pub fn is_not_equal<T: PartialEq + ?Sized>(first: &T, second: &T) -> bool {
    first != second
}

/// Exchange two values in place.
pub fn swap<T>(first: &mut T, second: &mut T) {
    std::mem::swap(first, second);
}
