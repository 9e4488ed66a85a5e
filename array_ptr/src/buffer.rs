use alloc::alloc::{handle_alloc_error, Layout};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::ArrayPtrError;

/// Sole owner of one fixed-length heap block of `T`.
///
/// A zero-length buffer holds no allocation at all. The block is released
/// exactly once: on drop, on [`ArrayPtr::release`], or when its ownership has
/// been swapped into another `ArrayPtr` that is dropped in turn.
pub struct ArrayPtr<T> {
    raw: Option<Box<[T]>>,
}

impl<T> ArrayPtr<T> {
    /// Creates a buffer that owns nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self { raw: None }
    }

    /// Allocates `len` default-initialized elements.
    ///
    /// # Errors
    ///
    /// Returns `ArrayPtrError::StorageExhausted` if the block cannot be
    /// allocated, including when `len` elements would overflow `isize::MAX` bytes.
    pub fn try_new(len: usize) -> Result<Self, ArrayPtrError>
    where
        T: Default,
    {
        if len == 0 {
            return Ok(Self::empty());
        }

        let mut items = Vec::new();
        if items.try_reserve_exact(len).is_err() {
            log::debug!("array_ptr: allocation of {len} elements failed");
            return Err(ArrayPtrError::StorageExhausted { requested: len });
        }
        items.resize_with(len, T::default);

        Ok(Self {
            raw: Some(items.into_boxed_slice()),
        })
    }

    /// Allocates `len` default-initialized elements.
    ///
    /// Aborts through [`handle_alloc_error`] when the allocator fails, the same
    /// way `Vec` does. Use [`ArrayPtr::try_new`] to observe the failure instead.
    #[must_use]
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        match Self::try_new(len) {
            Ok(buffer) => buffer,
            Err(_) => storage_exhausted::<T>(len),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.as_ref().map_or(0, |raw| raw.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_none()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.raw.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.raw.as_deref_mut().unwrap_or(&mut [])
    }

    /// Exchanges the owned blocks of two buffers without touching any element.
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        core::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Moves the owned block out, leaving this buffer empty.
    #[must_use]
    pub fn take(&mut self) -> ArrayPtr<T> {
        ArrayPtr {
            raw: self.raw.take(),
        }
    }

    /// Drops the owned block. Calling this on an empty buffer does nothing.
    pub fn release(&mut self) {
        if let Some(raw) = self.raw.take() {
            log::trace!("array_ptr: releasing block of {} elements", raw.len());
            drop(raw);
        }
    }

    /// Gives up ownership as a boxed slice. An empty buffer yields an empty slice.
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.raw.unwrap_or_default()
    }

    /// Returns the element at `index`, or an error if it lies outside the block.
    ///
    /// # Errors
    ///
    /// Returns `ArrayPtrError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, ArrayPtrError> {
        let length = self.len();
        self.as_slice()
            .get(index)
            .ok_or(ArrayPtrError::IndexOutOfBounds { index, length })
    }

    /// Mutable variant of [`ArrayPtr::try_get`].
    ///
    /// # Errors
    ///
    /// Returns `ArrayPtrError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, ArrayPtrError> {
        let length = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayPtrError::IndexOutOfBounds { index, length })
    }

    /// Returns the element at `index` without any range check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < len()`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns the element at `index` mutably without any range check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees `index < len()`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}

/// Diverges the way the global allocator does when `requested` elements of
/// `T` cannot be obtained.
///
/// # Panics
///
/// Panics with `"capacity overflow"` when `requested` elements do not even
/// form a valid layout.
pub fn storage_exhausted<T>(requested: usize) -> ! {
    match Layout::array::<T>(requested) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow"),
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(raw: Box<[T]>) -> Self {
        if raw.is_empty() {
            Self::empty()
        } else {
            Self { raw: Some(raw) }
        }
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from(items.into_boxed_slice())
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
