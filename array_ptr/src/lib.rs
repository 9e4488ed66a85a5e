#![no_std]

//! `ArrayPtr`: sole ownership of a single fixed-length heap block.
//!
//! An `ArrayPtr<T>` owns either nothing (length zero) or exactly one block of
//! default-initialized `T` values. It never grows or shrinks; code that needs
//! a bigger block allocates a new `ArrayPtr`, moves elements across, and
//! [`swap`](ArrayPtr::swap)s the two owners so the old block is dropped.
//!
//! The type is move-only: it does not implement `Clone`, and the block is
//! released exactly once.
//!
//! ```
//! # use array_ptr::ArrayPtr;
//! let mut small: ArrayPtr<u32> = ArrayPtr::new(2);
//! small[0] = 7;
//!
//! let mut big: ArrayPtr<u32> = ArrayPtr::new(4);
//! big.as_mut_slice()[..2].swap_with_slice(small.as_mut_slice());
//! small.swap(&mut big);
//!
//! assert_eq!(small.len(), 4);
//! assert_eq!(small[0], 7);
//! ```
//!
//! # Allocation failure
//!
//! [`ArrayPtr::try_new`] reports allocator failure as
//! [`ArrayPtrError::StorageExhausted`]. [`ArrayPtr::new`] diverges through
//! `handle_alloc_error` instead, matching the standard collections.
//!
//! ```
//! # use array_ptr::{ArrayPtr, ArrayPtrError};
//! let result = ArrayPtr::<u64>::try_new(usize::MAX);
//! assert_eq!(
//!     result.unwrap_err(),
//!     ArrayPtrError::StorageExhausted { requested: usize::MAX }
//! );
//! ```

extern crate alloc;

mod buffer;
mod error;

pub use buffer::{storage_exhausted, ArrayPtr};
pub use error::ArrayPtrError;
