use crate::vector::SimpleVector;

/// Capacity request that constructs an empty, pre-allocated `SimpleVector`.
///
/// ```
/// # use simple_vector::{reserve, SimpleVector};
/// let vector: SimpleVector<u8> = SimpleVector::from(reserve(16));
/// assert_eq!(vector.size(), 0);
/// assert_eq!(vector.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    #[must_use]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveProxy::new`].
#[must_use]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
    fn from(proxy: ReserveProxy) -> Self {
        Self::with_capacity(proxy.capacity())
    }
}
