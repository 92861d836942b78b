//! Phoenix Core
//!
//! Containers, random-access cursors, comparator primitives and the
//! comparison sorts that operate on them.

pub mod array;
pub mod config;
pub mod cursor;
pub mod error;
pub mod sort;
pub mod utility;
pub mod vector;

pub use array::FixedArray;
pub use config::{ConfigError, PhoenixConfig, SortConfig, VectorConfig, DEFAULT_GROWTH_INCREMENT};
pub use cursor::{Cursor, IteratorFlag, RandomAccess};
pub use error::CollectionError;
pub use sort::{
    bogo_sort, bogo_sort_by, bogo_sort_with_rng, bubble_sort, bubble_sort_by, insertion_sort,
    insertion_sort_by, is_sorted, is_sorted_by, selection_sort, selection_sort_by, SortAlgorithm,
};
pub use utility::{
    greater, is_equal, is_greater, is_greater_or_equal, is_lesser, is_lesser_or_equal,
    is_not_equal, lesser, swap, Pair,
};
pub use vector::Vector;
