use crate::{Input, Iteratee, effect::Monad};

/// Discards the first `n` elements, or fewer if the stream ends first.
///
/// Chunks are split the same way as [`take()`](super::take()), so
/// `drop(n)` skips exactly what `take(n)` would have returned.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::{consume, drop}};
///
/// let rest = drop::<_, Id>(2)
///     .flat_map(|()| consume())
///     .process(enumerate_chunks([vec![1, 2, 3], vec![4]]));
///
/// assert_eq!(rest, [3, 4]);
/// ```
pub fn drop<E, F>(n: usize) -> Iteratee<E, F, ()>
where
    E: 'static,
    F: Monad,
{
    if n == 0 {
        return Iteratee::pure(());
    }

    Iteratee::cont(move |input| match input.normalize() {
        Input::Empty => drop(n),
        Input::Element(_) => drop(n - 1),
        Input::Chunk(mut items) if items.len() > n => {
            let rest = items.split_off(n);
            Iteratee::done((), Input::Chunk(rest).normalize())
        }
        Input::Chunk(items) => drop(n - items.len()),
        Input::EndOfStream => Iteratee::done((), Input::EndOfStream),
    })
}

/// Discards elements as long as `pred` holds.
///
/// The first element failing `pred` is left over.
pub fn drop_while<E, F>(mut pred: impl FnMut(&E) -> bool + 'static) -> Iteratee<E, F, ()>
where
    E: 'static,
    F: Monad,
{
    Iteratee::cont(move |input| match input.normalize() {
        Input::Empty => drop_while(pred),
        Input::Element(item) if pred(&item) => drop_while(pred),
        Input::Element(item) => Iteratee::done((), Input::Element(item)),
        Input::Chunk(mut items) => match items.iter().position(|item| !pred(item)) {
            Some(split) => {
                let rest = items.split_off(split);
                Iteratee::done((), Input::Chunk(rest).normalize())
            }
            None => drop_while(pred),
        },
        Input::EndOfStream => Iteratee::done((), Input::EndOfStream),
    })
}

/// Discards elements until `pred` holds. The element that satisfies it is
/// left over.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::{drop_until, head}};
///
/// let first_negative = drop_until::<i32, Id>(|&n| n < 0)
///     .flat_map(|()| head())
///     .process(enumerate([3, 1, -4, 1, -5]));
///
/// assert_eq!(first_negative, Some(-4));
/// ```
pub fn drop_until<E, F>(mut pred: impl FnMut(&E) -> bool + 'static) -> Iteratee<E, F, ()>
where
    E: 'static,
    F: Monad,
{
    drop_while(move |item| !pred(item))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{
        consumers::{drop, drop_while},
        prelude::*,
    };

    #[test]
    fn drop_splits_chunk() {
        let step = drop::<_, Id>(3)
            .push(Input::Element(1))
            .push(Input::Chunk(vec![2, 3, 4, 5]))
            .into_inner();
        assert_eq!(step.into_done(), ((), Input::Chunk(vec![4, 5])));
    }

    #[test]
    fn drop_past_the_end() {
        let step = drop::<i32, Id>(5)
            .push(Input::Chunk(vec![1, 2]))
            .push(Input::EndOfStream)
            .into_inner();
        assert_eq!(step.into_done(), ((), Input::EndOfStream));
    }

    #[test]
    fn drop_while_leaves_first_failure() {
        let step = drop_while::<_, Id>(|c: &char| c.is_whitespace())
            .push(Input::Chunk(vec![' ', ' ']))
            .push(Input::Chunk(vec![' ', 'x']))
            .into_inner();
        assert_eq!(step.into_done(), ((), Input::Element('x')));
    }
}
