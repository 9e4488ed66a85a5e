#![no_std]

//! `SimpleVector`: a growable, contiguous vector built on a single owned buffer.
//!
//! The vector owns exactly one [`ArrayPtr`](array_ptr::ArrayPtr) at a time.
//! Every growth follows the same pattern: allocate a larger buffer, move the
//! live elements across, swap the buffers, drop the old one. A failed
//! allocation leaves the vector untouched.
//!
//! Buffer layout: [live elements: `0..size`][slack: `size..capacity`]
//! Slack slots are initialized values left behind by earlier operations.
//!
//! # Growth Policy
//!
//! - `push_back` on a full vector doubles the capacity; from capacity 0 it
//!   jumps to 4.
//! - `insert` on a full vector doubles the capacity; from capacity 0 it
//!   jumps to 1.
//! - `reserve` and `resize` allocate exactly the requested capacity and never
//!   shrink.
//!
//! ```
//! # use simple_vector::SimpleVector;
//! let mut vector = SimpleVector::new();
//! for value in [1, 2, 3, 4] {
//!     vector.push_back(value);
//! }
//! assert_eq!((vector.size(), vector.capacity()), (4, 4));
//!
//! vector.push_back(5);
//! assert_eq!((vector.size(), vector.capacity()), (5, 8));
//! ```
//!
//! # Positions
//!
//! Insert and erase take positions in `begin()..=end()`, which are plain
//! indices. The borrow checker rejects any reference into the vector that
//! would outlive a reallocating or shifting call.
//!
//! ```
//! # use simple_vector::{simple_vector, SimpleVector};
//! let mut letters = SimpleVector::from_elem(3, 'x');
//! *letters.insert(letters.begin() + 1, 'y') = 'Y';
//! assert_eq!(letters, ['x', 'Y', 'x', 'x']);
//!
//! let mut numbers = simple_vector![10, 20, 30];
//! numbers.erase(numbers.begin() + 1);
//! assert_eq!(numbers, [10, 30]);
//! assert_eq!(numbers.capacity(), 3);
//! ```
//!
//! # Checked Access
//!
//! Indexing with `[]` panics past the size. [`SimpleVector::at`] reports the
//! same condition as an error, and [`SimpleVector::get_unchecked`] skips the
//! check entirely.
//!
//! ```
//! # use simple_vector::{simple_vector, SimpleVectorError};
//! let vector = simple_vector![1, 2];
//! assert_eq!(vector.at(1), Ok(&2));
//! assert_eq!(
//!     vector.at(2),
//!     Err(SimpleVectorError::IndexOutOfBounds { index: 2, size: 2 })
//! );
//! ```
//!
//! ## Fallible Variants
//!
//! Every allocating operation has a `try_` twin that returns
//! [`SimpleVectorError::StorageExhausted`] instead of aborting, and position
//! errors as [`SimpleVectorError::PositionOutOfRange`] instead of panicking.
//!
//! ## `no_std` Compatibility
//!
//! This crate needs only `core` and `alloc`. Enable the `std` feature to
//! forward `std` support to the error types.

extern crate alloc;

mod error;
mod iter;
mod macros;
mod ops;
mod reserve;
mod vector;

pub use error::SimpleVectorError;
pub use iter::IntoIter;
pub use reserve::{reserve, ReserveProxy};
pub use vector::{SimpleVector, GROWTH_FACTOR, INSERT_GROWTH_FROM_EMPTY, PUSH_GROWTH_FROM_EMPTY};
