mod zip;

use crate::{
    Enumeratee, Enumerator, Input, Step,
    effect::{Comonad, Effect, Functor, Monad, NaturalTransformation, Up},
    step::finished,
};

/// A suspendable stream consumer that produces an `A` inside the effect
/// context `F`.
///
/// An `Iteratee` owns exactly one `F<Step<E, F, A>>`. It is a plain value:
/// every operation consumes it and hands back a new one.
///
/// # Examples
///
/// Sequencing two consumers over one stream. Whatever the first one leaves
/// over is offered to the second.
///
/// ```
/// use iteratee::{prelude::*, consumers::{consume, take}};
///
/// let halves = take::<_, Id>(2)
///     .flat_map(|front| consume().map(move |back| (front, back)))
///     .process(enumerate_chunks([vec![1, 2, 3], vec![4, 5]]));
///
/// assert_eq!(halves, (vec![1, 2], vec![3, 4, 5]));
/// ```
pub struct Iteratee<E, F: Effect, A> {
    pub(crate) value: F::Of<Step<E, F, A>>,
}

impl<E, F: Effect, A> Iteratee<E, F, A> {
    /// Wraps a step that lives inside the effect context.
    #[inline]
    pub fn new(value: F::Of<Step<E, F, A>>) -> Self {
        Self { value }
    }

    /// Unwraps the step inside the effect context.
    #[inline]
    pub fn into_inner(self) -> F::Of<Step<E, F, A>> {
        self.value
    }
}

impl<E, F, A> Iteratee<E, F, A>
where
    E: 'static,
    F: Functor,
    A: 'static,
{
    /// Inspects the current step, invoking exactly one of the handlers.
    pub fn fold_with<R: 'static>(
        self,
        on_continue: impl FnOnce(crate::Continuation<E, F, A>) -> R + 'static,
        on_done: impl FnOnce(A, Input<E>) -> R + 'static,
    ) -> F::Of<R> {
        F::map(self.value, move |step| step.fold(on_continue, on_done))
    }

    /// Whether the consumer has already finished.
    pub fn is_done(self) -> F::Of<bool> {
        F::map(self.value, |step| step.is_done())
    }

    /// Transforms the result once the consumer is done.
    ///
    /// Leftover input is kept as is. This behaves like
    /// `self.flat_map(|a| Iteratee::done(f(a), Input::Empty))` but only
    /// needs a [`Functor`].
    pub fn map<B: 'static>(self, f: impl FnOnce(A) -> B + 'static) -> Iteratee<E, F, B> {
        Iteratee::new(F::map(self.value, move |step| match step {
            Step::Continue(k) => Step::cont(move |input| k(input).map(f)),
            Step::Done(a, leftover) => Step::Done(f(a), leftover),
        }))
    }

    /// Adapts this consumer of `E` into a consumer of `EE`, pushing every
    /// incoming item through `f` first.
    ///
    /// End of stream stays end of stream. Any other leftover of the inner
    /// consumer cannot be turned back into `EE` and is reported as
    /// [`Empty`](Input::Empty).
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::{prelude::*, consumers::consume};
    ///
    /// let lengths = consume::<usize, Id>()
    ///     .contramap(|word: &str| word.len())
    ///     .process(enumerate(["a", "bcd", "ef"]));
    ///
    /// assert_eq!(lengths, [1, 3, 2]);
    /// ```
    pub fn contramap<EE: 'static>(
        self,
        mut f: impl FnMut(EE) -> E + 'static,
    ) -> Iteratee<EE, F, A> {
        Iteratee::new(F::map(self.value, move |step| match step {
            Step::Continue(k) => Step::cont(move |input: Input<EE>| {
                let mapped = input.map(&mut f);
                k(mapped).contramap(f)
            }),
            Step::Done(a, leftover) if leftover.is_end() => Step::Done(a, Input::EndOfStream),
            Step::Done(a, _) => Step::Done(a, Input::Empty),
        }))
    }

    /// Rewrites the effect context underneath, including the one every
    /// future suspension will run in.
    ///
    /// `transform` must be a natural transformation. See
    /// [`NaturalTransformation`] for what that obliges.
    pub fn map_i<G, T>(self, transform: T) -> Iteratee<E, G, A>
    where
        G: Effect,
        T: NaturalTransformation<F, G> + Clone + 'static,
    {
        let next = transform.clone();
        Iteratee::new(transform.apply(F::map(self.value, move |step| match step {
            Step::Continue(k) => Step::cont(move |input| k(input).map_i::<G, T>(next)),
            Step::Done(a, leftover) => Step::Done(a, leftover),
        })))
    }

    /// Embeds a consumer over an always-resolved context into a richer one.
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::{prelude::*, consumers::length};
    ///
    /// let n = length::<i32, Id>().up::<Fallible<String>>().process(enumerate([4, 5]));
    /// assert_eq!(n, Ok(2));
    /// ```
    pub fn up<G: Monad>(self) -> Iteratee<E, G, A>
    where
        F: Comonad,
    {
        self.map_i::<G, _>(Up::new())
    }
}

impl<E, F, A> Iteratee<E, F, A>
where
    E: 'static,
    F: Monad,
    A: 'static,
{
    /// Lifts a step into an iteratee without any effect.
    #[inline]
    pub fn from_step(step: Step<E, F, A>) -> Self {
        Self::new(F::pure(step))
    }

    /// A finished consumer.
    #[inline]
    pub fn done(a: A, leftover: Input<E>) -> Self {
        Self::from_step(Step::Done(a, leftover))
    }

    /// A consumer waiting for input.
    #[inline]
    pub fn cont(k: impl FnOnce(Input<E>) -> Self + 'static) -> Self {
        Self::from_step(Step::cont(k))
    }

    /// A consumer that finishes right away with `a`, consuming nothing.
    #[inline]
    pub fn pure(a: A) -> Self {
        Self::done(a, Input::Empty)
    }

    /// A consumer that finishes with the value computed in `fa`, consuming nothing.
    pub fn lift(fa: F::Of<A>) -> Self {
        Self::new(F::map(fa, |a| Step::Done(a, Input::Empty)))
    }

    /// Sequences another consumer after this one.
    ///
    /// While this consumer is running, input goes to it. Once it is done,
    /// `f` builds the next consumer from its result, and the leftover input
    /// is offered to that consumer first. If the next consumer is already
    /// done without needing it, the original leftover is kept.
    pub fn flat_map<B: 'static>(
        self,
        f: impl FnOnce(A) -> Iteratee<E, F, B> + 'static,
    ) -> Iteratee<E, F, B> {
        Iteratee::new(F::bind(self.value, move |step| match step {
            Step::Continue(k) => F::pure(Step::cont(move |input| k(input).flat_map(f))),
            Step::Done(a, leftover) if leftover.is_empty() => f(a).value,
            Step::Done(a, leftover) => F::bind(f(a).value, move |next| match next {
                Step::Continue(k) => k(leftover).value,
                // The second consumer didn't touch the leftover, so ours is
                // the accurate one.
                Step::Done(b, _) => F::pure(Step::Done(b, leftover)),
            }),
        }))
    }

    /// Hands the current step to `f` once the effect context has produced it.
    ///
    /// This is the building block for combinators that change the element
    /// or result type.
    pub fn advance<E2: 'static, A2: 'static>(
        self,
        f: impl FnOnce(Step<E, F, A>) -> Iteratee<E2, F, A2> + 'static,
    ) -> Iteratee<E2, F, A2> {
        Iteratee::new(F::bind(self.value, move |step| f(step).value))
    }

    /// Feeds exactly one input. A finished consumer ignores it.
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::{prelude::*, consumers::take};
    ///
    /// let step = take::<_, Id>(3).push(Input::Chunk(vec![1, 2, 3, 4, 5])).into_inner();
    /// assert_eq!(step.into_done(), (vec![1, 2, 3], Input::Chunk(vec![4, 5])));
    /// ```
    pub fn push(self, input: Input<E>) -> Self {
        self.advance(move |step| match step {
            Step::Continue(k) => k(input),
            done => Self::from_step(done),
        })
    }

    /// Lets `enumerator` drive this consumer.
    pub fn feed(self, enumerator: impl Enumerator<E, F> + 'static) -> Self {
        self.advance(move |step| enumerator.apply(step))
    }

    /// Signals end of stream and extracts the result.
    ///
    /// # Panics
    ///
    /// Panics if the consumer is still running after receiving end of stream.
    pub fn run(self) -> F::Of<A> {
        F::bind(self.value, |step| match step {
            Step::Continue(k) => F::map(k(Input::EndOfStream).value, finished),
            Step::Done(a, _) => F::pure(a),
        })
    }

    /// [`feed()`](Iteratee::feed)s `enumerator`, then [`run()`](Iteratee::run)s.
    pub fn process(self, enumerator: impl Enumerator<E, F> + 'static) -> F::Of<A> {
        self.feed(enumerator).run()
    }

    /// Feeds this consumer through `enumeratee`, producing a consumer of the
    /// enumeratee's outer element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::{prelude::*, consumers::consume, enumeratee};
    ///
    /// let doubled = consume::<i32, Id>()
    ///     .through(enumeratee::map(|n: i32| n * 2))
    ///     .process(enumerate([1, 2, 3]));
    ///
    /// assert_eq!(doubled, [2, 4, 6]);
    /// ```
    pub fn through<O: 'static>(
        self,
        enumeratee: impl Enumeratee<O, E, F> + 'static,
    ) -> Iteratee<O, F, A> {
        self.advance(move |step| enumeratee.apply(step)).join_i()
    }
}

impl<O, I, F, A> Iteratee<O, F, Step<I, F, A>>
where
    O: 'static,
    I: 'static,
    F: Monad,
    A: 'static,
{
    /// Flattens the nested result of an [`Enumeratee`].
    ///
    /// Once the outer consumer is done, the inner step is fed end of stream
    /// and its result becomes the result.
    ///
    /// # Panics
    ///
    /// Panics if the inner consumer is still running after receiving end of stream.
    pub fn join_i(self) -> Iteratee<O, F, A> {
        self.flat_map(|inner| match inner {
            Step::Continue(k) => {
                tracing::trace!("flattening: signalling end of stream to the inner consumer");
                Iteratee::lift(F::map(k(Input::EndOfStream).value, finished))
            }
            Step::Done(a, _) => Iteratee::pure(a),
        })
    }
}

impl<E, F: Effect, A> std::fmt::Debug for Iteratee<E, F, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iteratee").finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::{
        consumers::{consume, drop, head, length, peek, take},
        effect::{Eval, Fallible, Id, Unchanged},
        enumeratee,
        enumerator::{enumerate, enumerate_chunks},
        prelude::*,
    };

    /// A malformed consumer that never finishes.
    fn stubborn<E: 'static, F: Monad>() -> Iteratee<E, F, ()> {
        Iteratee::cont(|_| stubborn())
    }

    #[test]
    fn flat_map_hands_leftover_to_the_next_consumer() {
        let step = take::<_, Id>(2)
            .flat_map(|front| take(2).map(move |back| (front, back)))
            .push(Input::Chunk(vec![1, 2, 3, 4, 5]))
            .into_inner();

        assert_eq!(step.into_done(), ((vec![1, 2], vec![3, 4]), Input::Element(5)));
    }

    #[test]
    fn flat_map_keeps_leftover_when_next_is_done() {
        let step = take::<_, Id>(1)
            .flat_map(|front| Iteratee::done(front, Input::Empty))
            .push(Input::Chunk(vec![1, 2, 3]))
            .into_inner();

        assert_eq!(step.into_done(), (vec![1], Input::Chunk(vec![2, 3])));
    }

    #[test]
    fn flat_map_offers_end_of_stream() {
        let res = take::<i32, Id>(5)
            .flat_map(|front| consume().map(move |back| (front, back)))
            .process(enumerate([1, 2]));

        assert_eq!(res, (vec![1, 2], vec![]));
    }

    #[test]
    fn left_identity() {
        let f = |n: usize| take::<i32, Id>(n);
        let lhs = Iteratee::<i32, Id, _>::pure(2)
            .flat_map(f)
            .process(enumerate([1, 2, 3]));
        let rhs = f(2).process(enumerate([1, 2, 3]));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn head_then_peek_then_head() {
        let step = peek::<_, Id>()
            .push(Input::Chunk(vec![7, 8, 9]))
            .into_inner();
        let (peeked, leftover) = step.into_done();
        assert_eq!(peeked, Some(7));
        assert_eq!(leftover, Input::Chunk(vec![7, 8, 9]));

        let (headed, leftover) = head::<_, Id>().push(leftover).into_inner().into_done();
        assert_eq!(headed, Some(7));
        assert_eq!(leftover, Input::Chunk(vec![8, 9]));
    }

    #[test]
    fn map_keeps_leftover() {
        let step = take::<_, Id>(1)
            .map(|v| v.len())
            .push(Input::Chunk(vec![1, 2]))
            .into_inner();

        assert_eq!(step.into_done(), (1, Input::Element(2)));
    }

    #[test]
    fn contramap_forwards_end_of_stream() {
        let step = take::<usize, Id>(3)
            .contramap(|s: &str| s.len())
            .push(Input::Chunk(vec!["ab", "c"]))
            .push(Input::EndOfStream)
            .into_inner();

        assert_eq!(step.into_done(), (vec![2, 1], Input::EndOfStream));
    }

    #[test]
    fn contramap_drops_unconvertible_leftover() {
        let step = take::<usize, Id>(1)
            .contramap(|s: &str| s.len())
            .push(Input::Chunk(vec!["ab", "c"]))
            .into_inner();

        assert_eq!(step.into_done(), (vec![2], Input::Empty));
    }

    #[test]
    fn feed_does_not_signal_completion_twice() {
        let n = length::<i32, Id>()
            .feed(enumerate([1, 2, 3]))
            .feed(enumerate([4]))
            .run();

        // The first enumerator ends the stream, so the second one has nothing to do.
        assert_eq!(n, 3);
    }

    #[test]
    fn run_over_fallible() {
        let res = drop::<i32, Fallible<&str>>(1)
            .flat_map(|()| head())
            .process(enumerate([1, 2, 3]));
        assert_eq!(res, Ok(Some(2)));

        let failing = Iteratee::<i32, Fallible<&str>, i32>::new(Err("broken")).run();
        assert_eq!(failing, Err("broken"));
    }

    #[test]
    fn run_over_eval_is_deferred() {
        let fed = Rc::new(Cell::new(0));
        let thunk = length::<i32, Eval>()
            .contramap({
                let fed = Rc::clone(&fed);
                move |n: i32| {
                    fed.set(fed.get() + 1);
                    n
                }
            })
            .process(enumerate([1, 2, 3]));

        assert_eq!(fed.get(), 0);
        assert_eq!(thunk.force(), 3);
        assert_eq!(fed.get(), 3);
    }

    #[cfg(feature = "futures")]
    #[test]
    fn run_over_task() {
        let fut = take::<i32, Task>(2).process(enumerate([5, 6, 7]));
        assert_eq!(futures::executor::block_on(fut), [5, 6]);
    }

    #[test]
    fn is_done() {
        assert!(!length::<i32, Id>().is_done());
        assert!(Iteratee::<i32, Id, ()>::pure(()).is_done());
    }

    #[test]
    fn fold_with_dispatches() {
        let described = take::<i32, Id>(0).fold_with(|_| "continue", |_, _| "done");
        assert_eq!(described, "done");
    }

    #[test]
    fn map_i_unchanged() {
        let res = take::<i32, Id>(2)
            .map_i::<Id, _>(Unchanged)
            .process(enumerate([1, 2, 3]));
        assert_eq!(res, [1, 2]);
    }

    #[cfg(feature = "futures")]
    #[test]
    fn up_into_task() {
        let fut = consume::<i32, Id>().up::<Task>().process(enumerate([1, 2]));
        assert_eq!(futures::executor::block_on(fut), [1, 2]);
    }

    #[test]
    fn through_enumeratee() {
        let res = take::<i32, Id>(2)
            .through(enumeratee::filter(|n: &i32| n % 2 == 0))
            .process(enumerate_chunks([vec![1, 2, 3], vec![4, 5, 6]]));
        assert_eq!(res, [2, 4]);
    }

    #[test]
    #[should_panic(expected = "divergent iteratee")]
    fn run_detects_divergence() {
        stubborn::<i32, Id>().run();
    }

    #[test]
    #[should_panic(expected = "divergent iteratee")]
    fn join_i_detects_divergence() {
        stubborn::<i32, Id>()
            .through(enumeratee::map(|n: i32| n))
            .process(enumerate([1, 2]));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", length::<i32, Id>()), "Iteratee { .. }");
    }
}
