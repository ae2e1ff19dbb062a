//! Algebraic helpers for accumulating consumers.

use alloc::{collections::VecDeque, string::String, vec::Vec};

/// Types with an associative [`combine()`](Monoid::combine) and an identity
/// value [`empty()`](Monoid::empty).
///
/// Implementors must uphold:
///
/// - `a.combine(b).combine(c) == a.combine(b.combine(c))`
/// - `M::empty().combine(a) == a == a.combine(M::empty())`
///
/// Numbers combine by addition; sequences and strings combine by
/// concatenation.
///
/// This is what [`sum()`](crate::consumers::sum) and
/// [`collect_t()`](crate::consumers::collect_t) accumulate with.
///
/// # Examples
///
/// ```
/// use iteratee::ops::Monoid;
///
/// assert_eq!(i32::empty().combine(3).combine(4), 7);
/// assert_eq!(vec![1].combine(vec![2, 3]), [1, 2, 3]);
/// assert_eq!(String::from("ab").combine("cd".into()), "abcd");
/// ```
pub trait Monoid {
    /// The identity value.
    fn empty() -> Self;

    /// Combines two values associatively.
    fn combine(self, other: Self) -> Self;
}

macro_rules! additive_impl {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Monoid for $ty {
                #[inline]
                fn empty() -> Self {
                    $zero
                }

                #[inline]
                fn combine(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

additive_impl!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}

    #[inline]
    fn combine(self, _other: Self) -> Self {}
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl<T> Monoid for VecDeque<T> {
    #[inline]
    fn empty() -> Self {
        VecDeque::new()
    }

    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
