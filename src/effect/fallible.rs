use std::{marker::PhantomData, ops::ControlFlow};

use super::{Effect, Functor, Monad};

/// A failure-carrying context: `Fallible<Er>::Of<T>` is `Result<T, Er>`.
///
/// The first `Err` short-circuits every computation sequenced after it.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::fold_m};
///
/// // Sums the stream, but refuses negative numbers.
/// let checked_sum = || {
///     fold_m::<i32, Fallible<String>, i32>(0, |acc, n| {
///         if n < 0 {
///             Err(format!("negative input: {n}"))
///         } else {
///             Ok(acc + n)
///         }
///     })
/// };
///
/// assert_eq!(checked_sum().process(enumerate([1, 2, 3])), Ok(6));
/// assert_eq!(
///     checked_sum().process(enumerate([1, -2, 3])),
///     Err("negative input: -2".to_owned()),
/// );
/// ```
pub struct Fallible<Er>(PhantomData<fn() -> Er>);

impl<Er: 'static> Effect for Fallible<Er> {
    type Of<T> = Result<T, Er>;
}

impl<Er: 'static> Functor for Fallible<Er> {
    #[inline]
    fn map<A: 'static, B: 'static>(
        fa: Result<A, Er>,
        f: impl FnOnce(A) -> B + 'static,
    ) -> Result<B, Er> {
        fa.map(f)
    }
}

impl<Er: 'static> Monad for Fallible<Er> {
    #[inline]
    fn pure<A: 'static>(a: A) -> Result<A, Er> {
        Ok(a)
    }

    #[inline]
    fn bind<A: 'static, B: 'static>(
        fa: Result<A, Er>,
        f: impl FnOnce(A) -> Result<B, Er> + 'static,
    ) -> Result<B, Er> {
        fa.and_then(f)
    }

    fn tail_rec<S: 'static, B: 'static>(
        init: S,
        mut f: impl FnMut(S) -> Result<ControlFlow<B, S>, Er> + 'static,
    ) -> Result<B, Er> {
        let mut state = init;
        loop {
            match f(state)? {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(b) => return Ok(b),
            }
        }
    }
}

impl<Er> std::fmt::Debug for Fallible<Er> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fallible")
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn tail_rec_stops_at_first_error() {
        let mut calls = 0;
        let res = Fallible::<&str>::tail_rec(0, move |i| {
            calls += 1;
            assert!(calls <= 4, "looped past the error");
            if i == 3 {
                Err("three")
            } else {
                Ok(ControlFlow::<(), _>::Continue(i + 1))
            }
        });
        assert_eq!(res, Err("three"));
    }
}
