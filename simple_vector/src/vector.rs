use array_ptr::{storage_exhausted, ArrayPtr};

use crate::error::SimpleVectorError;

/// Capacity a full, never-allocated vector grows to on `push_back`.
pub const PUSH_GROWTH_FROM_EMPTY: usize = 4;
/// Capacity a full, never-allocated vector grows to on `insert`.
pub const INSERT_GROWTH_FROM_EMPTY: usize = 1;
/// Multiplier applied to a non-zero capacity when the vector is full.
pub const GROWTH_FACTOR: usize = 2;

/// A growable contiguous vector that owns exactly one [`ArrayPtr`].
///
/// Slots `[0, size)` hold the live elements. Slots `[size, capacity)` are
/// initialized but carry no meaning; they keep whatever a previous operation
/// left behind.
pub struct SimpleVector<T> {
    pub(crate) data: ArrayPtr<T>,
    pub(crate) size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Nothing is allocated.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: ArrayPtr::empty(),
            size: 0,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Position of the first element. Always `0`.
    #[must_use]
    pub fn begin(&self) -> usize {
        0
    }

    /// Position one past the last live element. Equal to `size()`.
    #[must_use]
    pub fn end(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.size]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.size]
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&T, SimpleVectorError> {
        let size = self.size;
        self.as_slice()
            .get(index)
            .ok_or(SimpleVectorError::IndexOutOfBounds { index, size })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::IndexOutOfBounds` if `index >= size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SimpleVectorError> {
        let size = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(SimpleVectorError::IndexOutOfBounds { index, size })
    }

    /// Returns the element at `index` without checking it against `size()`.
    ///
    /// # Safety
    ///
    /// `index` must be less than `size()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.size);
        // SAFETY: index < size <= capacity, as required by the caller.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Mutable variant of [`SimpleVector::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `index` must be less than `size()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.size);
        // SAFETY: index < size <= capacity, as required by the caller.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Drops the last element from the live range.
    ///
    /// The element stays in the buffer as slack; the returned reference views
    /// it. Returns `None` and does nothing if the vector is empty. Capacity is
    /// never touched.
    pub fn pop_back(&mut self) -> Option<&T> {
        if self.size == 0 {
            return None;
        }

        self.size -= 1;
        self.data.as_slice().get(self.size)
    }

    /// Removes the element at `position`, shifting the tail one slot toward
    /// the front.
    ///
    /// Returns `position`, which now locates the element that followed the
    /// erased one (or `end()` if the last element was erased).
    ///
    /// # Panics
    ///
    /// Panics if `position >= size()`.
    pub fn erase(&mut self, position: usize) -> usize {
        assert!(
            position < self.size,
            "erase position (is {position}) should be < size (is {})",
            self.size
        );
        self.erase_at(position)
    }

    /// Tries to remove the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::PositionOutOfRange` if `position >= size()`.
    pub fn try_erase(&mut self, position: usize) -> Result<usize, SimpleVectorError> {
        if position >= self.size {
            return Err(SimpleVectorError::PositionOutOfRange {
                position,
                size: self.size,
            });
        }
        Ok(self.erase_at(position))
    }

    fn erase_at(&mut self, position: usize) -> usize {
        // The erased value rotates into the slack slot at the old end.
        self.data.as_mut_slice()[position..self.size].rotate_left(1);
        self.size -= 1;
        position
    }

    /// Exchanges contents with `other` without touching any element.
    ///
    /// Swapping two elements of one vector goes through the slice:
    /// `vector.as_mut_slice().swap(i, j)`.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.data.swap(&mut other.data);
        core::mem::swap(&mut self.size, &mut other.size);
    }

    /// Makes the vector empty. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Capacity to grow to when the buffer is full, or `from_empty` when no
    /// buffer has been allocated yet.
    fn grown_capacity(&self, from_empty: usize) -> Result<usize, SimpleVectorError> {
        match self.capacity() {
            0 => Ok(from_empty),
            capacity => capacity
                .checked_mul(GROWTH_FACTOR)
                .ok_or(SimpleVectorError::StorageExhausted {
                    requested: usize::MAX,
                }),
        }
    }

    /// Whether every allocated slot holds a live element.
    fn is_full(&self) -> bool {
        self.check_invariant();
        self.size == self.capacity()
    }

    fn check_invariant(&self) {
        if self.size > self.capacity() {
            unreachable!(
                "vector size {} exceeds capacity {}",
                self.size,
                self.capacity()
            );
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates an empty vector with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        infallible::<T, _>(Self::try_with_capacity(capacity))
    }

    /// Tries to create an empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, SimpleVectorError> {
        Ok(Self {
            data: allocate(capacity)?,
            size: 0,
        })
    }

    /// Creates a vector of `size` default values.
    #[must_use]
    pub fn with_len(size: usize) -> Self {
        infallible::<T, _>(Self::try_with_len(size))
    }

    /// Tries to create a vector of `size` default values.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails.
    pub fn try_with_len(size: usize) -> Result<Self, SimpleVectorError> {
        Ok(Self {
            data: allocate(size)?,
            size,
        })
    }

    /// Ensures the capacity is at least `new_capacity`. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        infallible::<T, _>(self.try_reserve(new_capacity));
    }

    /// Tries to ensure the capacity is at least `new_capacity`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails. The
    /// vector is left unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), SimpleVectorError> {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity, "reserve")?;
        }
        Ok(())
    }

    /// Appends `value`, doubling the capacity when the vector is full.
    pub fn push_back(&mut self, value: T) {
        infallible::<T, _>(self.try_push_back(value));
    }

    /// Tries to append `value`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if the vector is full and
    /// a larger buffer cannot be allocated. The vector is left unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), SimpleVectorError> {
        if self.is_full() {
            let new_capacity = self.grown_capacity(PUSH_GROWTH_FROM_EMPTY)?;
            self.reallocate(new_capacity, "push_back")?;
        }

        self.data[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Inserts `value` at `position`, shifting later elements toward the end.
    ///
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `position > size()`.
    pub fn insert(&mut self, position: usize, value: T) -> &mut T {
        assert!(
            position <= self.size,
            "insertion position (is {position}) should be <= size (is {})",
            self.size
        );
        infallible::<T, _>(self.try_insert(position, value))
    }

    /// Tries to insert `value` at `position`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::PositionOutOfRange` if `position > size()`,
    /// or `SimpleVectorError::StorageExhausted` if the vector is full and a
    /// larger buffer cannot be allocated. The vector is left unchanged on error.
    pub fn try_insert(&mut self, position: usize, value: T) -> Result<&mut T, SimpleVectorError> {
        if position > self.size {
            return Err(SimpleVectorError::PositionOutOfRange {
                position,
                size: self.size,
            });
        }

        if !self.is_full() {
            let end = self.size;
            let slots = self.data.as_mut_slice();
            slots[end] = value;
            slots[position..=end].rotate_right(1);
        } else {
            let new_capacity = self.grown_capacity(INSERT_GROWTH_FROM_EMPTY)?;
            let mut replacement: ArrayPtr<T> = allocate(new_capacity)?;
            log::trace!(
                "simple_vector: insert grows capacity {} -> {new_capacity}",
                self.capacity()
            );

            let old = self.data.as_mut_slice();
            let new = replacement.as_mut_slice();
            new[..position].swap_with_slice(&mut old[..position]);
            new[position] = value;
            new[position + 1..=self.size].swap_with_slice(&mut old[position..self.size]);

            self.data.swap(&mut replacement);
        }

        self.size += 1;
        Ok(&mut self.data[position])
    }

    /// Changes the size to `new_size`, filling new slots with `T::default()`.
    pub fn resize(&mut self, new_size: usize) {
        infallible::<T, _>(self.try_resize(new_size));
    }

    /// Tries to change the size to `new_size`.
    ///
    /// Shrinking only truncates. Growing within the capacity resets the newly
    /// exposed slots to `T::default()`. Growing past the capacity allocates a
    /// buffer of exactly `new_size`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails. The
    /// vector is left unchanged in that case.
    pub fn try_resize(&mut self, new_size: usize) -> Result<(), SimpleVectorError> {
        if new_size > self.capacity() {
            // The fresh buffer is default-filled past the migrated elements.
            self.reallocate(new_size, "resize")?;
        } else if new_size > self.size {
            self.data.as_mut_slice()[self.size..new_size]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        }

        self.size = new_size;
        Ok(())
    }

    /// Moves the live elements into a new buffer of `new_capacity` slots and
    /// drops the old one.
    fn reallocate(
        &mut self,
        new_capacity: usize,
        operation: &'static str,
    ) -> Result<(), SimpleVectorError> {
        debug_assert!(new_capacity >= self.size);

        let mut replacement: ArrayPtr<T> = allocate(new_capacity)?;
        log::trace!(
            "simple_vector: {operation} grows capacity {} -> {new_capacity}",
            self.capacity()
        );

        let size = self.size;
        replacement.as_mut_slice()[..size].swap_with_slice(&mut self.data.as_mut_slice()[..size]);
        self.data.swap(&mut replacement);
        Ok(())
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Creates a vector of `size` copies of `value`.
    #[must_use]
    pub fn from_elem(size: usize, value: T) -> Self {
        infallible::<T, _>(Self::try_from_elem(size, value))
    }

    /// Tries to create a vector of `size` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails.
    pub fn try_from_elem(size: usize, value: T) -> Result<Self, SimpleVectorError> {
        let mut data: ArrayPtr<T> = allocate(size)?;
        data.as_mut_slice().fill(value);
        Ok(Self { data, size })
    }

    /// Deep-copies the live elements into a buffer of the same capacity.
    ///
    /// # Errors
    ///
    /// Returns `SimpleVectorError::StorageExhausted` if allocation fails.
    pub fn try_clone(&self) -> Result<Self, SimpleVectorError> {
        let mut data: ArrayPtr<T> = allocate(self.capacity())?;
        data.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Ok(Self {
            data,
            size: self.size,
        })
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        infallible::<T, _>(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() == source.capacity() {
            let size = source.size;
            self.data.as_mut_slice()[..size].clone_from_slice(source.as_slice());
            self.size = size;
        } else {
            *self = source.clone();
        }
    }
}

/// Allocates a default-filled buffer of `len` slots.
fn allocate<T: Default>(len: usize) -> Result<ArrayPtr<T>, SimpleVectorError> {
    ArrayPtr::try_new(len).map_err(|_| SimpleVectorError::StorageExhausted { requested: len })
}

/// Unwraps the result of a `try_` operation the way the standard collections
/// behave: allocation failure diverges through the global allocation error
/// handler, anything else panics.
fn infallible<T, R>(result: Result<R, SimpleVectorError>) -> R {
    match result {
        Ok(value) => value,
        Err(SimpleVectorError::StorageExhausted { requested }) => storage_exhausted::<T>(requested),
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    fn filled(values: &[i32]) -> SimpleVector<i32> {
        let mut vector = SimpleVector::new();
        for &value in values {
            vector.push_back(value);
        }
        vector
    }

    #[test]
    fn test_new_allocates_nothing() {
        let vector: SimpleVector<i32> = SimpleVector::new();
        assert_eq!(vector.size(), 0);
        assert_eq!(vector.capacity(), 0);
        assert!(vector.is_empty());
        assert!(vector.data.is_empty());
    }

    #[test]
    fn test_push_back_growth_sequence() {
        let mut vector = SimpleVector::new();
        let mut capacities = Vec::new();
        for value in 0..9 {
            vector.push_back(value);
            capacities.push(vector.capacity());
        }
        assert_eq!(capacities, [4, 4, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(vector.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_insert_growth_from_empty_is_one() {
        let mut vector = SimpleVector::new();
        vector.insert(0, 'a');
        assert_eq!(vector.capacity(), 1);
        vector.insert(0, 'b');
        assert_eq!(vector.capacity(), 2);
        vector.insert(1, 'c');
        assert_eq!(vector.capacity(), 4);
        assert_eq!(vector.as_slice(), &['b', 'c', 'a']);
    }

    #[test]
    fn test_pop_back_leaves_value_in_slack() {
        let mut vector = filled(&[1, 2, 3]);
        assert_eq!(vector.pop_back(), Some(&3));
        assert_eq!(vector.size(), 2);
        assert_eq!(vector.capacity(), 4);
        assert_eq!(vector.data[2], 3);
    }

    #[test]
    fn test_erase_rotates_value_into_slack() {
        let mut vector = filled(&[10, 20, 30]);
        assert_eq!(vector.erase(0), 0);
        assert_eq!(vector.as_slice(), &[20, 30]);
        assert_eq!(vector.data[2], 10);
    }

    #[test]
    fn test_resize_within_capacity_resets_stale_slots() {
        let mut vector = filled(&[7, 8, 9]);
        vector.resize(1);
        assert_eq!(vector.data.as_slice()[..3], [7, 8, 9]);

        vector.resize(3);
        assert_eq!(vector.as_slice(), &[7, 0, 0]);
        assert_eq!(vector.capacity(), 4);
    }

    #[test]
    fn test_reallocation_moves_without_cloning() {
        // `String` moves keep their heap pointers.
        let mut vector: SimpleVector<String> = SimpleVector::new();
        vector.push_back("first".to_string());
        let before = vector[0].as_ptr();

        vector.reserve(64);
        assert_eq!(vector[0].as_ptr(), before);
        assert_eq!(vector.capacity(), 64);
    }

    #[test]
    fn test_failed_insert_keeps_vector() {
        let mut vector = filled(&[1, 2]);
        let result = vector.try_insert(3, 5);
        assert_eq!(
            result.unwrap_err(),
            SimpleVectorError::PositionOutOfRange {
                position: 3,
                size: 2
            }
        );
        assert_eq!(vector.as_slice(), &[1, 2]);
        assert_eq!(vector.capacity(), 4);
    }

    #[test]
    fn test_at_reports_size_not_capacity() {
        let mut vector = filled(&[1, 2, 3]);
        vector.pop_back();

        assert_eq!(vector.capacity(), 4);
        assert_eq!(
            vector.at(2).unwrap_err(),
            SimpleVectorError::IndexOutOfBounds { index: 2, size: 2 }
        );
        assert_eq!(
            vector.at_mut(3).unwrap_err(),
            SimpleVectorError::IndexOutOfBounds { index: 3, size: 2 }
        );
    }

    #[test]
    fn test_is_full_tracks_spare_capacity() {
        let mut vector: SimpleVector<i32> = SimpleVector::new();
        assert!(vector.is_full());

        vector.push_back(1);
        assert!(!vector.is_full());

        vector.resize(4);
        assert!(vector.is_full());

        vector.clear();
        assert!(!vector.is_full());
    }

    #[test]
    fn test_clone_from_reuses_equal_capacity() {
        let source = filled(&[1, 2, 3]);
        let mut target = filled(&[9, 9]);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[1, 2, 3]);
        assert_eq!(target.capacity(), source.capacity());

        let mut target: SimpleVector<i32> = SimpleVector::with_capacity(10);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[1, 2, 3]);
        assert_eq!(target.capacity(), 4);
    }
}
