use alloc::boxed::Box;

use crate::{Input, Iteratee, effect::Effect};

/// The continuation held by a [`Step::Continue`].
pub type Continuation<E, F, A> = Box<dyn FnOnce(Input<E>) -> Iteratee<E, F, A>>;

/// The instantaneous status of a consumer.
///
/// `E` is the element type, `F` the [effect context](crate::effect) and
/// `A` the result.
pub enum Step<E, F: Effect, A> {
    /// Waiting for the next [`Input`].
    Continue(Continuation<E, F, A>),
    /// Finished with a result, plus whatever input it received but did not use.
    Done(A, Input<E>),
}

impl<E, F: Effect, A> Step<E, F, A> {
    /// Creates a [`Continue`](Step::Continue) step from a closure.
    #[inline]
    pub fn cont(k: impl FnOnce(Input<E>) -> Iteratee<E, F, A> + 'static) -> Self {
        Step::Continue(Box::new(k))
    }

    /// Invokes exactly one of the handlers, depending on the variant.
    pub fn fold<R>(
        self,
        on_continue: impl FnOnce(Continuation<E, F, A>) -> R,
        on_done: impl FnOnce(A, Input<E>) -> R,
    ) -> R {
        match self {
            Step::Continue(k) => on_continue(k),
            Step::Done(a, leftover) => on_done(a, leftover),
        }
    }

    /// Returns `true` if the step is [`Done`](Step::Done).
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done(..))
    }

    /// Returns `true` if the step is [`Continue`](Step::Continue).
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    /// Returns the result and leftover of a [`Done`](Step::Done) step.
    ///
    /// # Panics
    ///
    /// Panics if the step is [`Continue`](Step::Continue).
    /// Asking a running consumer for its result is a bug in the caller.
    #[track_caller]
    pub fn into_done(self) -> (A, Input<E>) {
        match self {
            Step::Done(a, leftover) => (a, leftover),
            Step::Continue(_) => panic!("called `Step::into_done()` on a `Continue` step"),
        }
    }
}

impl<E, F: Effect, A> std::fmt::Debug for Step<E, F, A>
where
    E: std::fmt::Debug,
    A: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Continue(_) => f.write_str("Continue(..)"),
            Step::Done(a, leftover) => f.debug_tuple("Done").field(a).field(leftover).finish(),
        }
    }
}

/// Unwraps a step that has just been fed end-of-stream.
///
/// A consumer that is still running at this point can never finish.
#[track_caller]
pub(crate) fn finished<E, F: Effect, A>(step: Step<E, F, A>) -> A {
    match step {
        Step::Done(a, _) => a,
        Step::Continue(_) => diverge(),
    }
}

#[cold]
#[track_caller]
pub(crate) fn diverge() -> ! {
    tracing::error!("consumer did not finish after receiving end of stream");
    panic!("divergent iteratee: consumer did not finish after end of stream")
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{Input, Iteratee, Step, effect::Id};

    #[test]
    fn fold_dispatch() {
        let done: Step<i32, Id, &str> = Step::Done("a", Input::Empty);
        assert_eq!(done.fold(|_| "continue", |a, _| a), "a");

        let cont: Step<i32, Id, &str> = Step::cont(|_| Iteratee::done("b", Input::Empty));
        assert!(cont.is_continue());
        assert_eq!(cont.fold(|_| "continue", |a, _| a), "continue");
    }

    #[test]
    fn into_done() {
        let done: Step<i32, Id, u8> = Step::Done(1, Input::Element(2));
        assert_eq!(done.into_done(), (1, Input::Element(2)));
    }

    #[test]
    #[should_panic(expected = "on a `Continue` step")]
    fn into_done_on_continue() {
        let cont: Step<i32, Id, u8> = Step::cont(|_| Iteratee::done(1, Input::Empty));
        let _ = cont.into_done();
    }

    #[test]
    fn debug() {
        let done: Step<i32, Id, u8> = Step::Done(1, Input::EndOfStream);
        assert_eq!(format!("{done:?}"), "Done(1, EndOfStream)");

        let cont: Step<i32, Id, u8> = Step::cont(|_| Iteratee::done(1, Input::Empty));
        assert_eq!(format!("{cont:?}"), "Continue(..)");
    }
}
