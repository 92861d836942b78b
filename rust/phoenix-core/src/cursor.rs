//! Random-access cursors.
//!
//! A [`Cursor`] is a plain position: it carries no borrow of the buffer it
//! points into, so any number of cursors can be held while the buffer is
//! mutated. The buffer itself is reached through a [`RandomAccess`] handle,
//! which dereferences a cursor into a shared or mutable element reference.
//!
//! Cursor arithmetic is unchecked and wraps; a cursor that walked outside its
//! range is only caught when it is dereferenced, at which point the access
//! panics with the offending offset.

use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use std::ops::{Not, Sub, SubAssign};

// ── Cursor ──────────────────────────────────────────────────────────────

/// A position inside a contiguous buffer.
///
/// Two cursors compare equal iff they denote the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor {
    offset: isize,
}

impl Cursor {
    /// Cursor at a signed offset from the start of a buffer.
    pub const fn new(offset: isize) -> Self {
        Cursor { offset }
    }

    /// Cursor at slot `index`.
    pub const fn at(index: usize) -> Self {
        Cursor {
            offset: index as isize,
        }
    }

    /// Signed offset from the start of the buffer.
    pub fn offset(self) -> isize {
        self.offset
    }

    /// Slot index, or `None` if the cursor sits before the start.
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.offset).ok()
    }

    /// Pre-increment: advance and return the new position.
    pub fn inc(&mut self) -> Self {
        *self += 1;
        *self
    }

    /// Post-increment: advance and return the previous position.
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        *self += 1;
        previous
    }

    /// Pre-decrement: step back and return the new position.
    pub fn dec(&mut self) -> Self {
        *self -= 1;
        *self
    }

    /// Post-decrement: step back and return the previous position.
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        *self -= 1;
        previous
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(self, n: usize) -> Cursor {
        Cursor::new(self.offset.wrapping_add(n as isize))
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(self, n: usize) -> Cursor {
        Cursor::new(self.offset.wrapping_sub(n as isize))
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

/// Signed distance between two cursors.
impl Sub for Cursor {
    type Output = isize;

    fn sub(self, other: Cursor) -> isize {
        self.offset.wrapping_sub(other.offset)
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.offset)
    }
}

// ── Iterator categories ─────────────────────────────────────────────────

/// Capability flags of an iterator kind.
///
/// Each richer category includes the bits of the one it refines, so
/// `RANDOM_ACCESS.contains(FORWARD)` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IteratorFlag(u32);

impl IteratorFlag {
    pub const NONE: IteratorFlag = IteratorFlag(0);
    pub const INPUT: IteratorFlag = IteratorFlag(0x01);
    pub const OUTPUT: IteratorFlag = IteratorFlag(0x02);
    pub const FORWARD: IteratorFlag = IteratorFlag(0x04 | Self::INPUT.0);
    pub const BIDIRECTIONAL: IteratorFlag = IteratorFlag(0x08 | Self::FORWARD.0);
    pub const RANDOM_ACCESS: IteratorFlag = IteratorFlag(0x10 | Self::BIDIRECTIONAL.0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        IteratorFlag(bits)
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: IteratorFlag) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IteratorFlag {
    type Output = IteratorFlag;

    fn bitor(self, rhs: IteratorFlag) -> IteratorFlag {
        IteratorFlag(self.0 | rhs.0)
    }
}

impl BitAnd for IteratorFlag {
    type Output = IteratorFlag;

    fn bitand(self, rhs: IteratorFlag) -> IteratorFlag {
        IteratorFlag(self.0 & rhs.0)
    }
}

impl BitXor for IteratorFlag {
    type Output = IteratorFlag;

    fn bitxor(self, rhs: IteratorFlag) -> IteratorFlag {
        IteratorFlag(self.0 ^ rhs.0)
    }
}

impl Not for IteratorFlag {
    type Output = IteratorFlag;

    fn not(self) -> IteratorFlag {
        IteratorFlag(!self.0)
    }
}

impl BitOrAssign for IteratorFlag {
    fn bitor_assign(&mut self, rhs: IteratorFlag) {
        *self = *self | rhs;
    }
}

impl BitAndAssign for IteratorFlag {
    fn bitand_assign(&mut self, rhs: IteratorFlag) {
        *self = *self & rhs;
    }
}

impl BitXorAssign for IteratorFlag {
    fn bitxor_assign(&mut self, rhs: IteratorFlag) {
        *self = *self ^ rhs;
    }
}

// ── RandomAccess ────────────────────────────────────────────────────────

/// A contiguous buffer that can be walked with [`Cursor`]s.
///
/// Implementors only expose their logical elements as a slice; cursor
/// dereferencing, swapping and the `begin`/`end` pair are provided.
pub trait RandomAccess {
    type Item;

    /// Capabilities of cursors over this buffer.
    const CATEGORY: IteratorFlag = IteratorFlag::RANDOM_ACCESS;

    fn as_items(&self) -> &[Self::Item];

    fn as_items_mut(&mut self) -> &mut [Self::Item];

    /// Number of logical elements.
    fn len(&self) -> usize {
        self.as_items().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cursor at the first element.
    fn begin(&self) -> Cursor {
        Cursor::at(0)
    }

    /// Cursor one past the last logical element.
    fn end(&self) -> Cursor {
        Cursor::at(self.len())
    }

    /// Dereference a cursor immutably.
    ///
    /// # Panics
    /// Panics if `cursor` is not inside `[begin, end)`.
    fn item(&self, cursor: Cursor) -> &Self::Item {
        let slot = checked_slot(cursor, self.len());
        &self.as_items()[slot]
    }

    /// Dereference a cursor mutably.
    ///
    /// # Panics
    /// Panics if `cursor` is not inside `[begin, end)`.
    fn item_mut(&mut self, cursor: Cursor) -> &mut Self::Item {
        let slot = checked_slot(cursor, self.len());
        &mut self.as_items_mut()[slot]
    }

    /// Exchange the elements under two cursors.
    ///
    /// # Panics
    /// Panics if either cursor is not inside `[begin, end)`.
    fn swap_at(&mut self, a: Cursor, b: Cursor) {
        let len = self.len();
        let (i, j) = (checked_slot(a, len), checked_slot(b, len));
        self.as_items_mut().swap(i, j);
    }
}

fn checked_slot(cursor: Cursor, len: usize) -> usize {
    match cursor.index() {
        Some(slot) if slot < len => slot,
        _ => panic!(
            "cursor {} dereferenced outside a range of {} elements",
            cursor, len
        ),
    }
}

impl<T> RandomAccess for [T] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }

    fn as_items_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> RandomAccess for Vec<T> {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }

    fn as_items_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> RandomAccess for [T; N] {
    type Item = T;

    fn as_items(&self) -> &[T] {
        self
    }

    fn as_items_mut(&mut self) -> &mut [T] {
        self
    }
}
