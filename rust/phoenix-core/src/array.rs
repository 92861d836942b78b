//! Fixed-size inline array.
//!
//! Same cursor capabilities as [`Vector`](crate::Vector), but the `N` slots
//! live inline and are never reallocated: size and capacity are both `N`.

use std::fmt;
use std::io;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::cursor::{Cursor, RandomAccess};
use crate::error::CollectionError;
use crate::vector::write_braced;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Every slot holds the default value.
    pub fn new() -> Self {
        FixedArray {
            data: std::array::from_fn(|_| T::default()),
        }
    }

    /// Copy `items` into the leading slots; the rest stay default-valued.
    ///
    /// Fails without constructing anything when `items` has more than `N`
    /// elements.
    pub fn try_from_slice(items: &[T]) -> Result<Self, CollectionError>
    where
        T: Clone,
    {
        if items.len() > N {
            return Err(CollectionError::InitializerTooLarge {
                len: items.len(),
                capacity: N,
            });
        }
        let mut array = Self::new();
        array.data[..items.len()].clone_from_slice(items);
        Ok(array)
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Every slot holds a copy of `value`.
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        FixedArray {
            data: std::array::from_fn(|_| value.clone()),
        }
    }

    /// Always `N`.
    pub const fn size(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn at(&self, index: usize) -> Result<&T, CollectionError> {
        self.data
            .get(index)
            .ok_or(CollectionError::out_of_range(index, N))
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        self.data
            .get_mut(index)
            .ok_or(CollectionError::out_of_range(index, N))
    }

    pub fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    pub fn end(&self) -> Cursor {
        Cursor::at(N)
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Write every element followed by `separator`.
    pub fn print<W: io::Write>(&self, out: &mut W, separator: &str) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in &self.data {
            write!(out, "{}{}", item, separator)?;
        }
        Ok(())
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        FixedArray { data }
    }
}

impl<T: Default + Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = CollectionError;

    fn try_from(items: &[T]) -> Result<Self, CollectionError> {
        Self::try_from_slice(items)
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> Index<Cursor> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, cursor: Cursor) -> &T {
        self.item(cursor)
    }
}

impl<T, const N: usize> IndexMut<Cursor> for FixedArray<T, N> {
    fn index_mut(&mut self, cursor: Cursor) -> &mut T {
        self.item_mut(cursor)
    }
}

impl<T, const N: usize> RandomAccess for FixedArray<T, N> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        &self.data
    }

    fn as_items_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, &self.data)
    }
}
