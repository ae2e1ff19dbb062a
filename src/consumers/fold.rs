use std::ops::ControlFlow;

use crate::{Input, Iteratee, effect::Monad, ops::Monoid};

/// Strict left fold over every element, finishing at end of stream.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::fold};
///
/// let product = fold::<_, Id, _>(1, |acc, n: u64| acc * n).process(enumerate(1..=5));
/// assert_eq!(product, 120);
/// ```
pub fn fold<E, F, B>(init: B, f: impl FnMut(B, E) -> B + 'static) -> Iteratee<E, F, B>
where
    E: 'static,
    F: Monad,
    B: 'static,
{
    fn step<E, F, B, G>(acc: B, mut f: G) -> Iteratee<E, F, B>
    where
        E: 'static,
        F: Monad,
        B: 'static,
        G: FnMut(B, E) -> B + 'static,
    {
        Iteratee::cont(move |input| match input {
            Input::Empty => step(acc, f),
            Input::Element(item) => {
                let acc = f(acc, item);
                step(acc, f)
            }
            Input::Chunk(items) => {
                let acc = items.into_iter().fold(acc, &mut f);
                step(acc, f)
            }
            Input::EndOfStream => Iteratee::done(acc, Input::EndOfStream),
        })
    }

    step(init, f)
}

/// Left fold whose step function runs in the effect context.
///
/// Elements of a chunk are folded left to right, each step sequenced after
/// the previous one in `F`.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::fold_m};
///
/// let checked = fold_m::<u8, Fallible<&str>, u8>(0, |acc, n| acc.checked_add(n).ok_or("overflow"));
///
/// assert_eq!(checked.process(enumerate([200, 100])), Err("overflow"));
/// ```
pub fn fold_m<E, F, B>(init: B, f: impl FnMut(B, E) -> F::Of<B> + 'static) -> Iteratee<E, F, B>
where
    E: 'static,
    F: Monad,
    B: 'static,
{
    fn step<E, F, B, G>(acc: B, mut f: G) -> Iteratee<E, F, B>
    where
        E: 'static,
        F: Monad,
        B: 'static,
        G: FnMut(B, E) -> F::Of<B> + 'static,
    {
        Iteratee::cont(move |input| match input.normalize() {
            Input::Empty => step(acc, f),
            Input::Element(item) => {
                let next = f(acc, item);
                Iteratee::lift(next).flat_map(move |acc| step(acc, f))
            }
            Input::Chunk(items) => {
                let folded = F::tail_rec((acc, items.into_iter(), f), |(acc, mut items, mut f)| {
                    match items.next() {
                        Some(item) => F::map(f(acc, item), move |acc| {
                            ControlFlow::Continue((acc, items, f))
                        }),
                        None => F::pure(ControlFlow::Break((acc, f))),
                    }
                });
                Iteratee::lift(folded).flat_map(|(acc, f)| step(acc, f))
            }
            Input::EndOfStream => Iteratee::done(acc, Input::EndOfStream),
        })
    }

    step(init, f)
}

/// Counts the elements.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::length};
///
/// let n = length::<_, Id>().process(enumerate_chunks([vec!['a', 'b'], vec![], vec!['c']]));
/// assert_eq!(n, 3);
/// ```
pub fn length<E, F>() -> Iteratee<E, F, usize>
where
    E: 'static,
    F: Monad,
{
    fold(0, |n, _| n + 1)
}

/// Combines every element with [`Monoid::combine()`], starting from
/// [`Monoid::empty()`].
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::sum};
///
/// assert_eq!(sum::<i32, Id>().process(enumerate([1, 2, 3])), 6);
/// assert_eq!(sum::<i32, Id>().process(enumerate([])), 0);
/// ```
pub fn sum<E, F>() -> Iteratee<E, F, E>
where
    E: Monoid + 'static,
    F: Monad,
{
    fold_m(E::empty(), |acc: E, item| F::pure(acc.combine(item)))
}
