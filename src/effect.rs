//! The effect contexts an [`Iteratee`](crate::Iteratee) can run in.
//!
//! Rust has no higher-kinded types, so an effect context is encoded as a
//! zero-sized marker type whose generic associated type [`Of<T>`](Effect::Of)
//! names the wrapped value. For example, [`Id::Of<T>`](Id) is just `T`,
//! and [`Fallible<Er>::Of<T>`](Fallible) is `Result<T, Er>`.
//!
//! The capabilities are split the way the core needs them:
//!
//! - [`Functor`]: `map`. Enough for [`Iteratee::map()`](crate::Iteratee::map)
//!   and [`Iteratee::map_i()`](crate::Iteratee::map_i).
//! - [`Monad`]: `pure`, `bind` and `tail_rec`. Needed by sequencing,
//!   running and feeding.
//! - [`Comonad`]: `extract`. Only needed by [`Iteratee::up()`](crate::Iteratee::up).
//! - [`NaturalTransformation`]: rewrites one context into another.
//!
//! # Examples
//!
//! ```
//! use iteratee::{prelude::*, consumers::take};
//!
//! let taken = take::<_, Id>(2).process(enumerate([1, 2, 3]));
//! assert_eq!(taken, [1, 2]);
//!
//! let taken = take::<_, Fallible<&str>>(2).process(enumerate([1, 2, 3]));
//! assert_eq!(taken, Ok(vec![1, 2]));
//! ```

mod eval;
mod fallible;
mod id;
#[cfg(feature = "futures")]
mod task;

pub use eval::*;
pub use fallible::*;
pub use id::*;
#[cfg(feature = "futures")]
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
pub use task::*;

use std::{marker::PhantomData, ops::ControlFlow};

/// A type-level name for an effect context `F`.
///
/// Implementors are marker types; they are never instantiated.
pub trait Effect: 'static {
    /// The context applied to `T`, i.e. `F<T>`.
    type Of<T>;
}

/// Effect contexts whose values can be transformed.
pub trait Functor: Effect {
    /// Applies `f` to the value inside `fa`.
    fn map<A: 'static, B: 'static>(
        fa: Self::Of<A>,
        f: impl FnOnce(A) -> B + 'static,
    ) -> Self::Of<B>;
}

/// Effect contexts that can sequence computations.
///
/// Implementations must satisfy the monad laws; the iteratee laws
/// (left/right identity, associativity) are only as good as these.
pub trait Monad: Functor {
    /// Wraps a value without any effect.
    fn pure<A: 'static>(a: A) -> Self::Of<A>;

    /// Runs `fa`, then feeds its value to `f`.
    fn bind<A: 'static, B: 'static>(
        fa: Self::Of<A>,
        f: impl FnOnce(A) -> Self::Of<B> + 'static,
    ) -> Self::Of<B>;

    /// Repeats `f`, starting from `init`, until it yields [`Break`].
    ///
    /// The default implementation recurses through [`bind()`](Monad::bind),
    /// which costs one stack frame per iteration for contexts that evaluate
    /// eagerly. Every context in this crate overrides it with a loop.
    ///
    /// [`Break`]: ControlFlow::Break
    fn tail_rec<S: 'static, B: 'static>(
        init: S,
        mut f: impl FnMut(S) -> Self::Of<ControlFlow<B, S>> + 'static,
    ) -> Self::Of<B> {
        let first = f(init);
        Self::bind(first, move |flow| match flow {
            ControlFlow::Continue(state) => Self::tail_rec(state, f),
            ControlFlow::Break(b) => Self::pure(b),
        })
    }
}

/// Effect contexts that always hold a value that can be taken out right away.
pub trait Comonad: Functor {
    /// Takes the value out of the context.
    fn extract<A: 'static>(fa: Self::Of<A>) -> A;
}

/// A rewrite of one effect context into another.
///
/// Implementations must be structure-preserving: `apply(F::map(fa, f))`
/// has to behave like `G::map(apply(fa), f)`. The compiler cannot check this.
/// If it does not hold, [`Iteratee::map_i()`](crate::Iteratee::map_i) may
/// skip or duplicate suspension points.
pub trait NaturalTransformation<F: Effect, G: Effect> {
    /// Rewrites `fa` into the target context.
    fn apply<T: 'static>(&self, fa: F::Of<T>) -> G::Of<T>;
}

/// The identity transformation from a context into itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchanged;

impl<F: Effect> NaturalTransformation<F, F> for Unchanged {
    #[inline]
    fn apply<T: 'static>(&self, fa: F::Of<T>) -> F::Of<T> {
        fa
    }
}

/// Extracts eagerly from a [`Comonad`] and re-wraps purely in a [`Monad`].
///
/// This is what [`Iteratee::up()`](crate::Iteratee::up) uses.
pub struct Up<G>(PhantomData<fn() -> G>);

impl<G> Up<G> {
    /// Creates the transformation.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<G> Default for Up<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> Clone for Up<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Up<G> {}

impl<G> std::fmt::Debug for Up<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Up")
    }
}

impl<F, G> NaturalTransformation<F, G> for Up<G>
where
    F: Comonad,
    G: Monad,
{
    #[inline]
    fn apply<T: 'static>(&self, fa: F::Of<T>) -> G::Of<T> {
        G::pure(F::extract(fa))
    }
}
