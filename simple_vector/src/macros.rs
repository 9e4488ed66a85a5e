/// Builds a [`SimpleVector`](crate::SimpleVector) from a literal list, the way
/// `vec!` builds a `Vec`.
///
/// ```
/// # use simple_vector::simple_vector;
/// let numbers = simple_vector![10, 20, 30];
/// assert_eq!(numbers.size(), 3);
/// assert_eq!(numbers.capacity(), 3);
///
/// let letters = simple_vector!['x'; 3];
/// assert_eq!(letters, ['x', 'x', 'x']);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
