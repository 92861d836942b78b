use thiserror::Error;

/// Errors raised by checked container operations.
///
/// Every variant is reported to the immediate caller; containers never retry
/// or recover internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Checked access with an index at or past the logical size.
    #[error("index {index} is out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    /// `remove_last` on a container holding no elements.
    #[error("cannot remove from an empty container")]
    EmptyContainer,
    /// Fixed array built from more values than it has slots.
    #[error("initializer of {len} elements does not fit into {capacity} slots")]
    InitializerTooLarge { len: usize, capacity: usize },
}

impl CollectionError {
    /// Build the out-of-range error for `index` against a container of `size`.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        CollectionError::IndexOutOfRange { index, size }
    }
}
