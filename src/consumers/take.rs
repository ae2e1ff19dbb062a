use alloc::vec::Vec;

use crate::{Input, Iteratee, effect::Monad};

/// Collects the first `n` elements, or fewer if the stream ends first.
///
/// A chunk that straddles the boundary is split, and its remainder becomes
/// the leftover in the same step. `take(0)` is done right away.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::take};
///
/// let (front, leftover) = take::<_, Id>(3)
///     .push(Input::Chunk(vec![1, 2, 3, 4, 5]))
///     .into_inner()
///     .into_done();
///
/// assert_eq!(front, [1, 2, 3]);
/// assert_eq!(leftover, Input::Chunk(vec![4, 5]));
/// ```
pub fn take<E, F>(n: usize) -> Iteratee<E, F, Vec<E>>
where
    E: 'static,
    F: Monad,
{
    fn step<E: 'static, F: Monad>(mut taken: Vec<E>, remaining: usize) -> Iteratee<E, F, Vec<E>> {
        if remaining == 0 {
            return Iteratee::pure(taken);
        }

        Iteratee::cont(move |input| match input.normalize() {
            Input::Empty => step(taken, remaining),
            Input::Element(item) => {
                taken.push(item);
                step(taken, remaining - 1)
            }
            Input::Chunk(mut items) if items.len() > remaining => {
                let rest = items.split_off(remaining);
                taken.extend(items);
                Iteratee::done(taken, Input::Chunk(rest).normalize())
            }
            Input::Chunk(items) => {
                let remaining = remaining - items.len();
                taken.extend(items);
                step(taken, remaining)
            }
            Input::EndOfStream => Iteratee::done(taken, Input::EndOfStream),
        })
    }

    step(Vec::new(), n)
}

/// Collects elements as long as `pred` holds.
///
/// The first element failing `pred` is left over, along with everything
/// after it in the same chunk.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::take_while};
///
/// let (digits, leftover) = take_while::<_, Id>(char::is_ascii_digit)
///     .push(Input::Chunk(vec!['4', '2', 'k', 'g']))
///     .into_inner()
///     .into_done();
///
/// assert_eq!(digits, ['4', '2']);
/// assert_eq!(leftover, Input::Chunk(vec!['k', 'g']));
/// ```
pub fn take_while<E, F>(pred: impl FnMut(&E) -> bool + 'static) -> Iteratee<E, F, Vec<E>>
where
    E: 'static,
    F: Monad,
{
    fn step<E, F, P>(mut taken: Vec<E>, mut pred: P) -> Iteratee<E, F, Vec<E>>
    where
        E: 'static,
        F: Monad,
        P: FnMut(&E) -> bool + 'static,
    {
        Iteratee::cont(move |input| match input.normalize() {
            Input::Empty => step(taken, pred),
            Input::Element(item) if pred(&item) => {
                taken.push(item);
                step(taken, pred)
            }
            Input::Element(item) => Iteratee::done(taken, Input::Element(item)),
            Input::Chunk(mut items) => match items.iter().position(|item| !pred(item)) {
                Some(split) => {
                    let rest = items.split_off(split);
                    taken.extend(items);
                    Iteratee::done(taken, Input::Chunk(rest).normalize())
                }
                None => {
                    taken.extend(items);
                    step(taken, pred)
                }
            },
            Input::EndOfStream => Iteratee::done(taken, Input::EndOfStream),
        })
    }

    step(Vec::new(), pred)
}

/// Collects elements until `pred` holds. The element that satisfies it is
/// left over.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::take_until};
///
/// let line = take_until::<_, Id>(|&b| b == b'\n').process(enumerate(*b"ab\ncd"));
/// assert_eq!(line, b"ab");
/// ```
pub fn take_until<E, F>(mut pred: impl FnMut(&E) -> bool + 'static) -> Iteratee<E, F, Vec<E>>
where
    E: 'static,
    F: Monad,
{
    take_while(move |item| !pred(item))
}
