//! Drivers that push data into consumers.
//!
//! An [`Enumerator`] takes a [`Step`] and drives it forward with data from
//! some source. Implementations must:
//!
//! - stop feeding as soon as the step is [`Done`](Step::Done);
//! - feed [`EndOfStream`](Input::EndOfStream) once a finite source is exhausted.
//!
//! The enumerators here run through [`Monad::tail_rec()`], so the length of
//! the source does not grow the call stack.

use std::ops::ControlFlow;

use crate::{Input, Iteratee, Step, effect::Monad};

/// Drives a [`Step`] forward using some data source.
///
/// The method is generic over the consumer's result type, so one enumerator
/// can drive any consumer over `E`.
pub trait Enumerator<E, F: Monad> {
    /// Feeds `step` until the source is exhausted or the step is done.
    fn apply<A: 'static>(self, step: Step<E, F, A>) -> Iteratee<E, F, A>;
}

/// An [`Enumerator`] that delivers a sequence of [`Input`]s, then end of stream.
///
/// This `struct` is created by [`enumerate()`], [`enumerate_chunks()`] and
/// [`enumerate_inputs()`]. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Inputs<I> {
    inputs: I,
}

/// Delivers every item of `items` as its own [`Element`](Input::Element).
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::consume};
///
/// let all = consume::<_, Id>().process(enumerate(1..=3));
/// assert_eq!(all, [1, 2, 3]);
/// ```
pub fn enumerate<I>(items: I) -> Inputs<std::iter::Map<I::IntoIter, fn(I::Item) -> Input<I::Item>>>
where
    I: IntoIterator,
{
    Inputs {
        inputs: items.into_iter().map(Input::Element as fn(_) -> _),
    }
}

/// Delivers every batch of `chunks` as one [`Chunk`](Input::Chunk).
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::take};
///
/// let front = take::<_, Id>(3).process(enumerate_chunks([vec![1, 2], vec![3, 4]]));
/// assert_eq!(front, [1, 2, 3]);
/// ```
pub fn enumerate_chunks<I, E>(
    chunks: I,
) -> Inputs<std::iter::Map<I::IntoIter, fn(alloc::vec::Vec<E>) -> Input<E>>>
where
    I: IntoIterator<Item = alloc::vec::Vec<E>>,
{
    Inputs {
        inputs: chunks.into_iter().map(Input::Chunk as fn(_) -> _),
    }
}

/// Delivers `inputs` as they are.
///
/// Delivery stops early at an [`EndOfStream`](Input::EndOfStream) in `inputs`.
pub fn enumerate_inputs<I, E>(inputs: I) -> Inputs<I::IntoIter>
where
    I: IntoIterator<Item = Input<E>>,
{
    Inputs {
        inputs: inputs.into_iter(),
    }
}

impl<E, F, I> Enumerator<E, F> for Inputs<I>
where
    E: 'static,
    F: Monad,
    I: Iterator<Item = Input<E>> + 'static,
{
    fn apply<A: 'static>(self, step: Step<E, F, A>) -> Iteratee<E, F, A> {
        Iteratee::new(F::tail_rec(
            (Some(self.inputs), step),
            |(inputs, step): (Option<I>, Step<E, F, A>)| match (inputs, step) {
                (Some(mut inputs), Step::Continue(k)) => {
                    let input = inputs.next().unwrap_or_else(|| {
                        tracing::trace!("source exhausted; signalling end of stream");
                        Input::EndOfStream
                    });
                    let inputs = (!input.is_end()).then_some(inputs);
                    F::map(k(input).into_inner(), move |step| {
                        ControlFlow::Continue((inputs, step))
                    })
                }
                (_, step) => F::pure(ControlFlow::Break(step)),
            },
        ))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        consumers::{consume, head, length},
        effect::{Fallible, Id},
    };

    #[test]
    fn stops_feeding_once_done() {
        let pulled = Rc::new(RefCell::new(Vec::new()));
        let source = {
            let pulled = Rc::clone(&pulled);
            (1..=5).inspect(move |&n| pulled.borrow_mut().push(n))
        };

        let first = head::<_, Id>().process(enumerate(source));
        assert_eq!(first, Some(1));
        assert_eq!(*pulled.borrow(), [1]);
    }

    #[test]
    fn signals_end_of_stream() {
        let step = length::<i32, Id>().feed(enumerate([1, 2])).into_inner();
        assert_eq!(step.into_done(), (2, Input::EndOfStream));
    }

    #[test]
    fn end_of_stream_in_inputs_stops_delivery() {
        let all = consume::<_, Id>().process(enumerate_inputs([
            Input::Element(1),
            Input::EndOfStream,
            Input::Element(2),
        ]));
        assert_eq!(all, [1]);
    }

    #[test]
    fn long_source_does_not_overflow() {
        let n = length::<u32, Id>().process(enumerate(0..1_000_000));
        assert_eq!(n, 1_000_000);
    }

    #[test]
    fn empty_source() {
        let all = consume::<i32, Fallible<()>>().process(enumerate([]));
        assert_eq!(all, Ok(vec![]));
    }
}
