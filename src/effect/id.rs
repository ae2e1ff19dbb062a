use std::ops::ControlFlow;

use super::{Comonad, Effect, Functor, Monad};

/// The synchronous identity context: `Id::Of<T>` is `T` itself.
///
/// Iteratees over `Id` run eagerly, and [`run()`](crate::Iteratee::run)
/// hands back the plain result.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::length};
///
/// let n: usize = length::<char, Id>().process(enumerate("hello".chars()));
/// assert_eq!(n, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Id;

impl Effect for Id {
    type Of<T> = T;
}

impl Functor for Id {
    #[inline]
    fn map<A: 'static, B: 'static>(fa: A, f: impl FnOnce(A) -> B + 'static) -> B {
        f(fa)
    }
}

impl Monad for Id {
    #[inline]
    fn pure<A: 'static>(a: A) -> A {
        a
    }

    #[inline]
    fn bind<A: 'static, B: 'static>(fa: A, f: impl FnOnce(A) -> B + 'static) -> B {
        f(fa)
    }

    fn tail_rec<S: 'static, B: 'static>(
        init: S,
        mut f: impl FnMut(S) -> ControlFlow<B, S> + 'static,
    ) -> B {
        let mut state = init;
        loop {
            match f(state) {
                ControlFlow::Continue(next) => state = next,
                ControlFlow::Break(b) => return b,
            }
        }
    }
}

impl Comonad for Id {
    #[inline]
    fn extract<A: 'static>(fa: A) -> A {
        fa
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn tail_rec_does_not_grow_the_stack() {
        let n = Id::tail_rec(0_u64, |i| {
            if i == 1_000_000 {
                ControlFlow::Break(i)
            } else {
                ControlFlow::Continue(i + 1)
            }
        });
        assert_eq!(n, 1_000_000);
    }
}
