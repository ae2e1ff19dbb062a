//! Adapters between a stream of one element type and a consumer of another.
//!
//! An [`Enumeratee`] takes the [`Step`] of an inner consumer and returns an
//! outer consumer whose result is that inner step, advanced as far as the
//! outer stream allowed. [`Iteratee::through()`] plugs a consumer into an
//! enumeratee and flattens the result with [`Iteratee::join_i()`].
//!
//! The enumeratees here relay outer [`EndOfStream`](Input::EndOfStream)
//! by finishing with the inner step and end of stream as their own
//! leftover. The inner step is not fed end of stream. That is left to
//! [`join_i()`](Iteratee::join_i).
//!
//! # Examples
//!
//! ```
//! use iteratee::{prelude::*, consumers::{consume, sum}, enumeratee};
//!
//! let sums = sum::<u32, Id>()
//!     .through(enumeratee::map(|c: char| c.to_digit(10).unwrap_or(0)))
//!     .process(enumerate("1234".chars()));
//!
//! assert_eq!(sums, 10);
//!
//! let pairs = consume::<Vec<char>, Id>()
//!     .through(enumeratee::group(2))
//!     .process(enumerate("abcde".chars()));
//!
//! assert_eq!(pairs, [vec!['a', 'b'], vec!['c', 'd'], vec!['e']]);
//! ```

use std::ops::ControlFlow;

use alloc::vec::Vec;

use crate::{
    Continuation, Input, IntoIter, Iteratee, Step,
    consumers::take,
    effect::Monad,
    step::finished,
};

/// Turns a consumer over `I` into a consumer over `O`.
pub trait Enumeratee<O, I, F: Monad> {
    /// Drives `step` with data derived from the outer stream, finishing with
    /// whatever step the inner consumer has reached.
    fn apply<A: 'static>(self, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>>;
}

/// An [`Enumeratee`] that converts every element.
///
/// This `struct` is created by [`map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<G> {
    f: G,
}

/// An [`Enumeratee`] that only lets through elements satisfying a predicate.
///
/// This `struct` is created by [`filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<P> {
    pred: P,
}

/// An [`Enumeratee`] that converts and filters elements at the same time.
///
/// This `struct` is created by [`filter_map()`]. See its documentation for more.
#[derive(Clone)]
pub struct FilterMap<G> {
    f: G,
}

/// An [`Enumeratee`] that runs a consumer over and over, feeding each of
/// its results to the inner consumer as one element.
///
/// This `struct` is created by [`sequence_i()`] and [`group()`]. See their
/// documentation for more.
#[derive(Clone)]
pub struct Sequence<G> {
    make: G,
}

/// Converts every element with `f`.
pub fn map<O, I, G>(f: G) -> Map<G>
where
    G: FnMut(O) -> I + 'static,
{
    Map { f }
}

/// Lets through only the elements satisfying `pred`.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::take, enumeratee};
///
/// let evens = take::<i32, Id>(3)
///     .through(enumeratee::filter(|n: &i32| n % 2 == 0))
///     .process(enumerate(1..));
///
/// assert_eq!(evens, [2, 4, 6]);
/// ```
pub fn filter<E, P>(pred: P) -> Filter<P>
where
    P: FnMut(&E) -> bool + 'static,
{
    Filter { pred }
}

/// Converts elements with `f`, dropping those it maps to `None`.
pub fn filter_map<O, I, G>(f: G) -> FilterMap<G>
where
    G: FnMut(O) -> Option<I> + 'static,
{
    FilterMap { f }
}

/// Repeats the consumer built by `make` until the stream ends or the inner
/// consumer is done.
///
/// A fresh consumer is built for every run. Each run starts where the
/// previous one stopped, including its leftover. The repeated consumer
/// must consume at least one element per run before the stream ends,
/// otherwise it is restarted forever.
///
/// Chunks are handed to the repeated consumer one element at a time, in a
/// [`tail_rec()`](Monad::tail_rec) loop, so a large chunk costs neither
/// stack depth nor copying. Once the inner consumer is done, the outer
/// elements it did not need are left over.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::{consume, drop_while, take_until}, enumeratee};
///
/// let words = consume::<String, Id>()
///     .through(enumeratee::sequence_i(|| {
///         drop_while(|c: &char| *c == ' ')
///             .flat_map(|()| take_until(|c: &char| *c == ' '))
///             .map(String::from_iter)
///     }))
///     .process(enumerate_chunks([vec!['h', 'i', ' ', ' ', 'y'], vec!['o']]));
///
/// assert_eq!(words, ["hi", "yo"]);
/// ```
pub fn sequence_i<O, I, F, G>(make: G) -> Sequence<G>
where
    F: Monad,
    G: FnMut() -> Iteratee<O, F, I> + 'static,
{
    Sequence { make }
}

/// Cuts the stream into groups of `n` elements. The last group may be shorter.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn group<E, F>(n: usize) -> Sequence<impl FnMut() -> Iteratee<E, F, Vec<E>> + 'static>
where
    E: 'static,
    F: Monad,
{
    assert!(n > 0, "group size must be positive");
    sequence_i(move || take(n))
}

impl<O, I, F, G> Enumeratee<O, I, F> for Map<G>
where
    O: 'static,
    I: 'static,
    F: Monad,
    G: FnMut(O) -> I + 'static,
{
    fn apply<A: 'static>(self, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>> {
        let mut f = self.f;
        relay(move |input: Input<O>| input.map(&mut f), step)
    }
}

impl<E, F, P> Enumeratee<E, E, F> for Filter<P>
where
    E: 'static,
    F: Monad,
    P: FnMut(&E) -> bool + 'static,
{
    fn apply<A: 'static>(self, step: Step<E, F, A>) -> Iteratee<E, F, Step<E, F, A>> {
        let mut pred = self.pred;
        relay(
            move |input: Input<E>| input.into_iter().filter(&mut pred).collect(),
            step,
        )
    }
}

impl<O, I, F, G> Enumeratee<O, I, F> for FilterMap<G>
where
    O: 'static,
    I: 'static,
    F: Monad,
    G: FnMut(O) -> Option<I> + 'static,
{
    fn apply<A: 'static>(self, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>> {
        let mut f = self.f;
        relay(
            move |input: Input<O>| input.into_iter().filter_map(&mut f).collect(),
            step,
        )
    }
}

/// Drives `step` with every outer input passed through `convert`.
///
/// Once the inner consumer is done, the rest of the outer input it arrived
/// in cannot be turned back into `O`, so the leftover is empty.
fn relay<O, I, F, A, G>(mut convert: G, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>>
where
    O: 'static,
    I: 'static,
    F: Monad,
    A: 'static,
    G: FnMut(Input<O>) -> Input<I> + 'static,
{
    match step {
        Step::Continue(k) => Iteratee::cont(move |input| {
            if input.is_end() {
                return Iteratee::done(Step::Continue(k), Input::EndOfStream);
            }

            let converted = convert(input);
            if converted.is_empty() {
                return relay(convert, Step::Continue(k));
            }

            Iteratee::lift(k(converted).into_inner()).flat_map(move |step| relay(convert, step))
        }),
        done => Iteratee::pure(done),
    }
}

impl<O, I, F, G> Enumeratee<O, I, F> for Sequence<G>
where
    O: 'static,
    I: 'static,
    F: Monad,
    G: FnMut() -> Iteratee<O, F, I> + 'static,
{
    fn apply<A: 'static>(self, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>> {
        repeat(self.make, step)
    }
}

fn repeat<O, I, F, A, G>(make: G, step: Step<I, F, A>) -> Iteratee<O, F, Step<I, F, A>>
where
    O: 'static,
    I: 'static,
    F: Monad,
    A: 'static,
    G: FnMut() -> Iteratee<O, F, I> + 'static,
{
    match step {
        Step::Continue(k) => resume(make, k, None),
        done => Iteratee::pure(done),
    }
}

/// Waits for the next outer input, with `running` holding a repeated
/// consumer that has started but not finished.
fn resume<O, I, F, A, G>(
    make: G,
    k: Continuation<I, F, A>,
    running: Option<Continuation<O, F, I>>,
) -> Iteratee<O, F, Step<I, F, A>>
where
    O: 'static,
    I: 'static,
    F: Monad,
    A: 'static,
    G: FnMut() -> Iteratee<O, F, I> + 'static,
{
    Iteratee::cont(move |input| match (input, running) {
        (Input::EndOfStream, Some(running)) => {
            let item = F::map(running(Input::EndOfStream).into_inner(), finished);
            let inner = F::bind(item, move |item| k(Input::Element(item)).into_inner());
            Iteratee::new(F::map(inner, |step| Step::Done(step, Input::EndOfStream)))
        }
        (Input::EndOfStream, None) => Iteratee::done(Step::Continue(k), Input::EndOfStream),
        (input, running) => restart(make, k, running, input.into_iter()),
    })
}

/// Runs repeated consumers over `items` one element at a time, in a loop.
///
/// Once the inner consumer is done, the elements not yet used are left over.
fn restart<O, I, F, A, G>(
    make: G,
    k: Continuation<I, F, A>,
    running: Option<Continuation<O, F, I>>,
    items: IntoIter<O>,
) -> Iteratee<O, F, Step<I, F, A>>
where
    O: 'static,
    I: 'static,
    F: Monad,
    A: 'static,
    G: FnMut() -> Iteratee<O, F, I> + 'static,
{
    let looped = F::tail_rec(
        (make, k, running, Input::Empty, items),
        |(mut make, k, running, pending, mut items)| {
            let input = if pending.is_empty() {
                match items.next() {
                    Some(item) => Input::Element(item),
                    None => return F::pure(ControlFlow::Break(resume(make, k, running))),
                }
            } else {
                pending
            };

            let fed = match running {
                Some(running) => running(input).into_inner(),
                None => {
                    tracing::trace!("restarting the repeated consumer");
                    F::bind(make().into_inner(), move |fresh| match fresh {
                        Step::Continue(fresh) => fresh(input).into_inner(),
                        // Finished without looking at the input, so it is still pending.
                        Step::Done(item, _) => F::pure(Step::Done(item, input)),
                    })
                }
            };

            F::bind(fed, move |fed| match fed {
                Step::Continue(running) => F::pure(ControlFlow::Continue((
                    make,
                    k,
                    Some(running),
                    Input::Empty,
                    items,
                ))),
                Step::Done(item, leftover) => {
                    F::map(k(Input::Element(item)).into_inner(), move |inner| match inner {
                        Step::Continue(k) => ControlFlow::Continue((make, k, None, leftover, items)),
                        done => {
                            let rest = leftover.into_iter().chain(items).collect();
                            ControlFlow::Break(Iteratee::done(done, rest))
                        }
                    })
                }
            })
        },
    );

    Iteratee::new(F::bind(looped, Iteratee::into_inner))
}

impl<G> std::fmt::Debug for Map<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").finish_non_exhaustive()
    }
}

impl<P> std::fmt::Debug for Filter<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<G> std::fmt::Debug for FilterMap<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMap").finish_non_exhaustive()
    }
}

impl<G> std::fmt::Debug for Sequence<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}
