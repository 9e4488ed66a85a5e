use thiserror::Error;

/// Error types for `SimpleVector` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SimpleVectorError {
    /// A new backing buffer could not be allocated
    #[error("Storage exhausted: could not allocate {requested} elements")]
    StorageExhausted {
        /// Capacity that was requested
        requested: usize,
    },
    /// Index is beyond the current vector size
    #[error("Index out of bounds: index {index} is beyond vector size {size}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current size of the vector
        size: usize,
    },
    /// Insert or erase position is outside the range the operation accepts
    #[error("Position out of range: position {position} for vector of size {size}")]
    PositionOutOfRange {
        /// Position that was passed
        position: usize,
        /// Current size of the vector
        size: usize,
    },
}

