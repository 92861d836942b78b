//! Growable vector with linear capacity growth.
//!
//! `Vector<T>` owns a single heap buffer of `capacity` slots, of which the
//! first `size` hold logical elements. Slots past `size` are allocated but
//! their contents are unspecified. When an append finds the buffer
//! full, capacity grows by a fixed increment (16 unless configured) rather
//! than doubling.

use std::fmt;
use std::io;
use std::num::NonZeroUsize;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use tracing::trace;

use crate::config::{VectorConfig, DEFAULT_GROWTH_INCREMENT};
use crate::cursor::{Cursor, RandomAccess};
use crate::error::CollectionError;

/// A contiguous, growable container.
pub struct Vector<T> {
    /// Backing storage. `None` exactly when capacity is zero.
    buf: Option<Box<[T]>>,
    /// Number of logical elements.
    size: usize,
    /// Slots added whenever an append finds the buffer full.
    growth: NonZeroUsize,
}

impl<T> Vector<T> {
    // ── Constructors ────────────────────────────────────────────────────

    /// Create an empty vector with no buffer.
    pub fn new() -> Self {
        Self::with_growth(DEFAULT_GROWTH_INCREMENT)
    }

    /// Create an empty vector that grows by `growth` slots at a time.
    pub fn with_growth(growth: NonZeroUsize) -> Self {
        Vector {
            buf: None,
            size: 0,
            growth,
        }
    }

    /// Create an empty vector from a configuration section.
    pub fn with_config(config: &VectorConfig) -> Self {
        Self::with_growth(config.growth_increment)
    }

    /// Replace the growth increment of an already built vector.
    ///
    /// ```
    /// # use std::num::NonZeroUsize;
    /// # use phoenix_core::Vector;
    /// let growth = NonZeroUsize::new(4).unwrap();
    /// let mut v = Vector::from([1, 2, 3]).with_growth_increment(growth);
    /// v.append(4);
    /// assert_eq!(v.capacity(), 7);
    /// ```
    pub fn with_growth_increment(mut self, growth: NonZeroUsize) -> Self {
        self.growth = growth;
        self
    }

    /// Create a vector of `size` default values. Capacity equals `size`.
    pub fn with_size(size: usize) -> Self
    where
        T: Default,
    {
        Vector {
            buf: allocate(size),
            size,
            growth: DEFAULT_GROWTH_INCREMENT,
        }
    }

    /// Create a vector of `size` copies of `value`. Capacity equals `size`.
    pub fn with_value(size: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from(vec![value; size])
    }

    /// Copy the elements of a slice, in order. Capacity equals its length.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(items.to_vec())
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Number of logical elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, |buf| buf.len())
    }

    /// Slots added per reallocation triggered by [`Vector::append`].
    pub fn growth_increment(&self) -> usize {
        self.growth.get()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Logical elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        match &self.buf {
            Some(buf) => &buf[..self.size],
            None => &[],
        }
    }

    /// Logical elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.slots_mut()[..size]
    }

    /// Read-only view of the raw data. Only shared access is exposed.
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// Checked access.
    pub fn at(&self, index: usize) -> Result<&T, CollectionError> {
        self.as_slice()
            .get(index)
            .ok_or(CollectionError::out_of_range(index, self.size))
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, CollectionError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(CollectionError::out_of_range(index, size))
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    /// Cursor one past the last logical element.
    pub fn end(&self) -> Cursor {
        Cursor::at(self.size)
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Add `value` after the last element, growing the buffer by the
    /// configured increment when it is full.
    pub fn append(&mut self, value: T)
    where
        T: Default,
    {
        if self.size == self.capacity() {
            self.reserve(self.capacity() + self.growth.get());
        }
        let slot = self.size;
        self.slots_mut()[slot] = value;
        self.size += 1;
    }

    /// Remove and return the last element. Capacity is left unchanged.
    pub fn remove_last(&mut self) -> Result<T, CollectionError>
    where
        T: Default,
    {
        if self.size == 0 {
            return Err(CollectionError::EmptyContainer);
        }
        self.size -= 1;
        let slot = self.size;
        Ok(std::mem::take(&mut self.slots_mut()[slot]))
    }

    /// Reallocate to exactly `target` slots.
    ///
    /// Does nothing when `target` is at or below the current *size* (not
    /// capacity), so a reserve between size and capacity shrinks the buffer.
    pub fn reserve(&mut self, target: usize)
    where
        T: Default,
    {
        if self.size >= target {
            return;
        }

        let mut fresh = allocate::<T>(target);
        if let (Some(old), Some(new)) = (self.buf.as_deref_mut(), fresh.as_deref_mut()) {
            for (dst, src) in new.iter_mut().zip(&mut old[..self.size]) {
                std::mem::swap(dst, src);
            }
        }

        trace!(
            old_capacity = self.capacity(),
            new_capacity = target,
            size = self.size,
            "vector reallocated"
        );
        self.buf = fresh;
    }

    /// Reserve `new_size` slots, then set the size to `new_size`.
    ///
    /// Shrinking keeps the buffer; growing exposes default-valued slots.
    pub fn resize(&mut self, new_size: usize)
    where
        T: Default,
    {
        self.reserve(new_size);
        self.size = new_size;
    }

    /// Move the buffer out, leaving `self` empty with no buffer.
    ///
    /// The returned vector keeps the source's size, capacity and growth
    /// increment; no element is copied.
    pub fn take(&mut self) -> Self {
        let emptied = Self::with_growth(self.growth);
        std::mem::replace(self, emptied)
    }

    /// Write every element followed by `separator`.
    pub fn print<W: io::Write>(&self, out: &mut W, separator: &str) -> io::Result<()>
    where
        T: fmt::Display,
    {
        for item in self.iter() {
            write!(out, "{}{}", item, separator)?;
        }
        Ok(())
    }

    // --- internal helpers ---

    fn slots_mut(&mut self) -> &mut [T] {
        self.buf.as_deref_mut().unwrap_or_default()
    }
}

/// Allocate `slots` default-valued slots, or no buffer at all for zero.
fn allocate<T: Default>(slots: usize) -> Option<Box<[T]>> {
    if slots == 0 {
        return None;
    }
    Some((0..slots).map(|_| T::default()).collect())
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copying allocates exactly `size` slots; slack capacity is not preserved.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice()).with_growth_increment(self.growth)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        let size = items.len();
        Vector {
            buf: (size > 0).then(|| items.into_boxed_slice()),
            size,
            growth: DEFAULT_GROWTH_INCREMENT,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Index<Cursor> for Vector<T> {
    type Output = T;

    fn index(&self, cursor: Cursor) -> &T {
        self.item(cursor)
    }
}

impl<T> IndexMut<Cursor> for Vector<T> {
    fn index_mut(&mut self, cursor: Cursor) -> &mut T {
        self.item_mut(cursor)
    }
}

impl<T> RandomAccess for Vector<T> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self.as_slice()
    }

    fn as_items_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut items = self.buf.map(Vec::from).unwrap_or_default();
        items.truncate(self.size);
        items.into_iter()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Vector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.as_slice())
    }
}

/// `{a, b, c}`, or `{}` when empty.
pub(crate) fn write_braced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "}}")
}
