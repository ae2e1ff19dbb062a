use std::ops::ControlFlow;

use alloc::boxed::Box;

use super::{Comonad, Effect, Functor, Monad};

/// A deferred context: nothing runs until the [`Thunk`] is [forced](Thunk::force).
///
/// Each [`bind()`](Monad::bind) nests one closure, and forcing a deeply
/// left-nested chain costs one stack frame per level.
/// [`tail_rec()`](Monad::tail_rec) runs in a loop and is the way to iterate.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::consume};
///
/// let deferred = consume::<_, Eval>().process(enumerate([1, 2, 3]));
/// assert_eq!(deferred.force(), [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Eval;

/// A suspended computation, the value type of [`Eval`].
pub struct Thunk<T>(Box<dyn FnOnce() -> T>);

impl<T> Thunk<T> {
    /// Suspends `f` until forced.
    pub fn new(f: impl FnOnce() -> T + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Runs the suspended computation.
    #[inline]
    pub fn force(self) -> T {
        (self.0)()
    }
}

impl<T> std::fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Thunk(..)")
    }
}

impl Effect for Eval {
    type Of<T> = Thunk<T>;
}

impl Functor for Eval {
    fn map<A: 'static, B: 'static>(fa: Thunk<A>, f: impl FnOnce(A) -> B + 'static) -> Thunk<B> {
        Thunk::new(move || f(fa.force()))
    }
}

impl Monad for Eval {
    fn pure<A: 'static>(a: A) -> Thunk<A> {
        Thunk::new(move || a)
    }

    fn bind<A: 'static, B: 'static>(
        fa: Thunk<A>,
        f: impl FnOnce(A) -> Thunk<B> + 'static,
    ) -> Thunk<B> {
        Thunk::new(move || f(fa.force()).force())
    }

    fn tail_rec<S: 'static, B: 'static>(
        init: S,
        mut f: impl FnMut(S) -> Thunk<ControlFlow<B, S>> + 'static,
    ) -> Thunk<B> {
        Thunk::new(move || {
            let mut state = init;
            loop {
                match f(state).force() {
                    ControlFlow::Continue(next) => state = next,
                    ControlFlow::Break(b) => return b,
                }
            }
        })
    }
}

impl Comonad for Eval {
    #[inline]
    fn extract<A: 'static>(fa: Thunk<A>) -> A {
        fa.force()
    }
}
