use std::{cell::RefCell, collections::VecDeque, ops::ControlFlow, rc::Rc};

use proptest::prelude::*;

use crate::{Input, Iteratee, Step, effect::Monad, enumerator::Enumerator};

/// An enumerator whose clones all draw from one queue of inputs.
///
/// Feeding the same source to several consumers in turn models one stream
/// being handed over between them, and [`remaining()`](Self::remaining)
/// shows what nobody has pulled yet.
#[derive(Debug, Clone)]
pub struct SharedSource<E> {
    inputs: Rc<RefCell<VecDeque<Input<E>>>>,
}

impl<E> SharedSource<E> {
    /// One [`Chunk`](Input::Chunk) per batch.
    pub fn new(chunks: Vec<Vec<E>>) -> Self {
        Self::from_inputs(chunks.into_iter().map(Input::Chunk))
    }

    /// One [`Element`](Input::Element) per item.
    pub fn from_items(items: Vec<E>) -> Self {
        Self::from_inputs(items.into_iter().map(Input::Element))
    }

    fn from_inputs(inputs: impl IntoIterator<Item = Input<E>>) -> Self {
        Self {
            inputs: Rc::new(RefCell::new(inputs.into_iter().collect())),
        }
    }

    /// The elements not pulled by any consumer yet, in order.
    pub fn remaining(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.inputs
            .borrow()
            .iter()
            .flat_map(|input| input.clone())
            .collect()
    }
}

impl<E, F> Enumerator<E, F> for SharedSource<E>
where
    E: 'static,
    F: Monad,
{
    fn apply<A: 'static>(self, step: Step<E, F, A>) -> Iteratee<E, F, A> {
        Iteratee::new(F::tail_rec(step, move |step| match step {
            Step::Continue(k) => {
                let input = self
                    .inputs
                    .borrow_mut()
                    .pop_front()
                    .unwrap_or(Input::EndOfStream);
                let end = input.is_end();

                F::map(k(input).into_inner(), move |step| {
                    if end {
                        ControlFlow::Break(step)
                    } else {
                        ControlFlow::Continue(step)
                    }
                })
            }
            done => F::pure(ControlFlow::Break(done)),
        }))
    }
}

/// A stream of elements from `element`, cut into at most `max_chunks`
/// batches of up to 64 elements each. Empty batches are included.
pub fn chunked<S: Strategy>(
    element: S,
    max_chunks: usize,
) -> impl Strategy<Value = Vec<Vec<S::Value>>> {
    prop::collection::vec(prop::collection::vec(element, 0..=64), 0..=max_chunks)
}

/// A stream of one to three batches of up to 20,000 elements each.
pub fn large_chunks<S: Strategy>(element: S) -> impl Strategy<Value = Vec<Vec<S::Value>>> {
    prop::collection::vec(prop::collection::vec(element, 0..=20_000), 1..=3)
}

#[test]
fn shared_source_hands_over() {
    use crate::{consumers::take, effect::Id};

    let source = SharedSource::new(vec![vec![1, 2, 3], vec![4]]);
    let (front, leftover) = take::<_, Id>(1)
        .feed(source.clone())
        .into_inner()
        .into_done();

    assert_eq!(front, [1]);
    assert_eq!(leftover, Input::Chunk(vec![2, 3]));
    assert_eq!(source.remaining(), [4]);
}
