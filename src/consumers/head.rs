use crate::{Input, Iteratee, effect::Monad};

/// Takes the first element, leaving the rest of its chunk over.
///
/// Finishes with `None` if the stream ends first.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::head};
///
/// let (first, leftover) = head::<_, Id>()
///     .push(Input::Chunk(vec![7, 8, 9]))
///     .into_inner()
///     .into_done();
///
/// assert_eq!(first, Some(7));
/// assert_eq!(leftover, Input::Chunk(vec![8, 9]));
/// ```
pub fn head<E, F>() -> Iteratee<E, F, Option<E>>
where
    E: 'static,
    F: Monad,
{
    Iteratee::cont(|input| match input.normalize() {
        Input::Empty => head(),
        Input::Element(item) => Iteratee::pure(Some(item)),
        Input::Chunk(items) => {
            let mut items = items.into_iter();
            let first = items.next();
            Iteratee::done(first, items.collect())
        }
        Input::EndOfStream => Iteratee::done(None, Input::EndOfStream),
    })
}

/// Looks at the first element without consuming it.
///
/// The whole input the element arrived in is left over.
pub fn peek<E, F>() -> Iteratee<E, F, Option<E>>
where
    E: Clone + 'static,
    F: Monad,
{
    Iteratee::cont(|input: Input<E>| {
        let first = match &input {
            Input::Empty => return peek(),
            Input::Element(item) => Some(item.clone()),
            Input::Chunk(items) => match items.first() {
                Some(item) => Some(item.clone()),
                None => return peek(),
            },
            Input::EndOfStream => None,
        };

        Iteratee::done(first, input)
    })
}

/// Tells whether the stream has ended, without consuming anything.
///
/// # Examples
///
/// ```
/// use iteratee::{prelude::*, consumers::{drop, is_end}};
///
/// let ended = drop::<i32, Id>(2)
///     .flat_map(|()| is_end())
///     .process(enumerate([1, 2]));
///
/// assert!(ended);
/// ```
pub fn is_end<E, F>() -> Iteratee<E, F, bool>
where
    E: 'static,
    F: Monad,
{
    Iteratee::cont(|input| {
        if input.is_empty() {
            is_end()
        } else {
            Iteratee::done(input.is_end(), input)
        }
    })
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{
        consumers::{head, is_end, peek},
        prelude::*,
    };

    #[test]
    fn head_skips_empty_input() {
        let step = head::<_, Id>()
            .push(Input::Empty)
            .push(Input::Chunk(vec![]))
            .push(Input::Chunk(vec![4, 5]))
            .into_inner();
        assert_eq!(step.into_done(), (Some(4), Input::Element(5)));
    }

    #[test]
    fn head_at_end() {
        let step = head::<i32, Id>().push(Input::EndOfStream).into_inner();
        assert_eq!(step.into_done(), (None, Input::EndOfStream));
    }

    #[test]
    fn peek_keeps_the_element() {
        let step = peek::<_, Id>().push(Input::Element('a')).into_inner();
        assert_eq!(step.into_done(), (Some('a'), Input::Element('a')));

        let res = peek::<i32, Id>().process(enumerate([]));
        assert_eq!(res, None);
    }

    #[test]
    fn is_end_leaves_input_alone() {
        let step = is_end::<_, Id>().push(Input::Chunk(vec![1, 2])).into_inner();
        assert_eq!(step.into_done(), (false, Input::Chunk(vec![1, 2])));

        let step = is_end::<i32, Id>().push(Input::EndOfStream).into_inner();
        assert_eq!(step.into_done(), (true, Input::EndOfStream));
    }
}
