use alloc::{collections::VecDeque, vec::Vec};

use crate::{Input, Iteratee, effect::Monad, ops::Monoid};

/// Collects every element, in stream order.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::consume};
///
/// assert_eq!(consume::<i32, Id>().process(enumerate([])), []);
/// assert_eq!(consume::<_, Id>().process(enumerate([1, 2, 3])), [1, 2, 3]);
/// ```
pub fn consume<E, F>() -> Iteratee<E, F, Vec<E>>
where
    E: 'static,
    F: Monad,
{
    consume_in()
}

/// Collects every element into any container that can be extended.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use iteratee::{prelude::*, consumers::consume_in};
///
/// let set = consume_in::<_, Id, BTreeSet<_>>().process(enumerate([3, 1, 3, 2]));
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn consume_in<E, F, C>() -> Iteratee<E, F, C>
where
    E: 'static,
    F: Monad,
    C: Default + Extend<E> + 'static,
{
    fn step<E, F, C>(mut acc: C) -> Iteratee<E, F, C>
    where
        E: 'static,
        F: Monad,
        C: Extend<E> + 'static,
    {
        Iteratee::cont(move |input| match input {
            Input::EndOfStream => Iteratee::done(acc, Input::EndOfStream),
            items => {
                acc.extend(items);
                step(acc)
            }
        })
    }

    step(C::default())
}

/// Collects every element by [`combine`](Monoid::combine)-ing one-element
/// containers, starting from [`Monoid::empty()`].
///
/// A chunk is collected into one container before it is combined.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::collect_t};
///
/// let s = collect_t::<char, Id, String>().process(enumerate_chunks([vec!['a', 'b'], vec!['c']]));
/// assert_eq!(s, "abc");
/// ```
pub fn collect_t<E, F, M>() -> Iteratee<E, F, M>
where
    E: 'static,
    F: Monad,
    M: Monoid + FromIterator<E> + 'static,
{
    fn step<E, F, M>(acc: M) -> Iteratee<E, F, M>
    where
        E: 'static,
        F: Monad,
        M: Monoid + FromIterator<E> + 'static,
    {
        Iteratee::cont(move |input| match input {
            Input::EndOfStream => Iteratee::done(acc, Input::EndOfStream),
            input if input.is_empty() => step(acc),
            items => step(acc.combine(items.into_iter().collect())),
        })
    }

    step(M::empty())
}

/// Collects every element in reverse stream order.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::reversed};
///
/// let back = reversed::<_, Id>().process(enumerate_chunks([vec![1, 2], vec![3]]));
/// assert_eq!(back, [3, 2, 1]);
/// ```
pub fn reversed<E, F>() -> Iteratee<E, F, VecDeque<E>>
where
    E: 'static,
    F: Monad,
{
    super::fold(VecDeque::new(), |mut acc, item| {
        acc.push_front(item);
        acc
    })
}
