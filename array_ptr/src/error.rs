use thiserror::Error;

/// Error types for `ArrayPtr` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ArrayPtrError {
    /// The allocator could not provide a block of the requested length
    #[error("Storage exhausted: could not allocate {requested} elements")]
    StorageExhausted {
        /// Number of elements requested
        requested: usize,
    },
    /// Index is beyond the allocated length of the buffer
    #[error("Index out of bounds: index {index} is beyond buffer length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Allocated length of the buffer
        length: usize,
    },
}
