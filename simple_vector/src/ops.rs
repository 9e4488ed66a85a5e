use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use array_ptr::ArrayPtr;

use crate::vector::SimpleVector;

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// Equality compares sizes first, then elements pairwise.

impl<T: PartialEq<U>, U> PartialEq<SimpleVector<U>> for SimpleVector<T> {
    fn eq(&self, other: &SimpleVector<U>) -> bool {
        self.size() == other.size() && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for SimpleVector<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for SimpleVector<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for SimpleVector<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// Literal and collected sequences get a buffer of exactly their length.

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(items: Vec<T>) -> Self {
        let size = items.len();
        Self {
            data: ArrayPtr::from(items),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(mut vector: SimpleVector<T>) -> Self {
        let size = vector.size();
        let mut items = vector.data.take().into_boxed_slice().into_vec();
        items.truncate(size);
        items
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(*item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn test_debug_shows_live_range_only() {
        let mut vector = SimpleVector::from([1, 2, 3]);
        vector.pop_back();
        assert_eq!(format!("{vector:?}"), "[1, 2]");
    }

    #[test]
    fn test_equality_ignores_slack() {
        let mut left = SimpleVector::from([1, 2, 3]);
        left.pop_back();
        let right = SimpleVector::from([1, 2]);
        assert_eq!(left, right);
        assert_ne!(left.capacity(), right.capacity());
    }

    #[test]
    fn test_into_vec_drops_slack() {
        let mut vector = SimpleVector::from(vec![4, 5, 6]);
        vector.pop_back();
        assert_eq!(Vec::from(vector), vec![4, 5]);
    }

    #[test]
    fn test_range_indexing() {
        let vector = SimpleVector::from([1, 2, 3, 4]);
        assert_eq!(&vector[1..3], &[2, 3]);
        assert_eq!(&vector[..], &[1, 2, 3, 4]);
    }
}
