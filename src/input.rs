use alloc::vec::{self, Vec};

/// One delivery of data to a consumer.
///
/// # Examples
///
/// ```
/// use iteratee::Input;
///
/// let chunk: Input<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(chunk, Input::Chunk(vec![1, 2, 3]));
///
/// // Short chunks are normalized on construction.
/// let single: Input<i32> = [1].into_iter().collect();
/// assert_eq!(single, Input::Element(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Input<E> {
    /// No data this delivery.
    Empty,
    /// Exactly one item.
    Element(E),
    /// Zero or more items delivered together, in stream order.
    Chunk(Vec<E>),
    /// The stream is closed. Nothing will ever arrive after it.
    EndOfStream,
}

impl<E> Input<E> {
    /// Returns `true` if this delivery carries no items and is not the end
    /// of the stream.
    ///
    /// A zero-length [`Chunk`](Input::Chunk) counts as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Input::Empty => true,
            Input::Chunk(items) => items.is_empty(),
            Input::Element(_) | Input::EndOfStream => false,
        }
    }

    /// Returns `true` if this is [`EndOfStream`](Input::EndOfStream).
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, Input::EndOfStream)
    }

    /// Number of items buffered in this delivery.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Input::Empty | Input::EndOfStream => 0,
            Input::Element(_) => 1,
            Input::Chunk(items) => items.len(),
        }
    }

    /// Collapses a zero-length chunk into [`Empty`](Input::Empty) and a
    /// one-length chunk into [`Element`](Input::Element).
    ///
    /// Consumers observe no difference; they just get a cheaper case to match.
    pub fn normalize(self) -> Self {
        match self {
            Input::Chunk(mut items) if items.len() <= 1 => match items.pop() {
                Some(item) => Input::Element(item),
                None => Input::Empty,
            },
            other => other,
        }
    }

    /// Invokes exactly one of the handlers, depending on the variant.
    pub fn fold<R>(
        self,
        on_empty: impl FnOnce() -> R,
        on_element: impl FnOnce(E) -> R,
        on_chunk: impl FnOnce(Vec<E>) -> R,
        on_end: impl FnOnce() -> R,
    ) -> R {
        match self {
            Input::Empty => on_empty(),
            Input::Element(item) => on_element(item),
            Input::Chunk(items) => on_chunk(items),
            Input::EndOfStream => on_end(),
        }
    }

    /// Applies `f` to every buffered item, keeping the shape of the delivery.
    pub fn map<T>(self, mut f: impl FnMut(E) -> T) -> Input<T> {
        match self {
            Input::Empty => Input::Empty,
            Input::Element(item) => Input::Element(f(item)),
            Input::Chunk(items) => Input::Chunk(items.into_iter().map(f).collect()),
            Input::EndOfStream => Input::EndOfStream,
        }
    }

    /// Picks the leftover to report when two consumers have run over the
    /// same stream and finished with different leftovers.
    ///
    /// [`EndOfStream`](Input::EndOfStream) wins if either side has it.
    /// Otherwise the side with fewer buffered items wins, and `self` wins
    /// a tie. The side with fewer items is the one that consumed further,
    /// so no item is reported as left over that the other side already used.
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::Input;
    ///
    /// let a = Input::Chunk(vec![3, 4, 5]);
    /// let b = Input::Chunk(vec![4, 5]);
    /// assert_eq!(a.shorter(b), Input::Chunk(vec![4, 5]));
    ///
    /// assert_eq!(Input::Element(5).shorter(Input::EndOfStream), Input::EndOfStream);
    /// ```
    pub fn shorter(self, other: Self) -> Self {
        if self.is_end() || other.is_end() {
            Input::EndOfStream
        } else if other.len() < self.len() {
            other
        } else {
            self
        }
    }
}

impl<E> Default for Input<E> {
    fn default() -> Self {
        Input::Empty
    }
}

impl<E> FromIterator<E> for Input<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Input::Chunk(iter.into_iter().collect()).normalize()
    }
}

impl<E> IntoIterator for Input<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    /// Yields the buffered items. [`Empty`](Input::Empty) and
    /// [`EndOfStream`](Input::EndOfStream) yield nothing.
    fn into_iter(self) -> Self::IntoIter {
        let items = match self {
            Input::Empty | Input::EndOfStream => Vec::new(),
            Input::Element(item) => alloc::vec![item],
            Input::Chunk(items) => items,
        };

        IntoIter(items.into_iter())
    }
}

/// An iterator over the items buffered in an [`Input`].
///
/// This `struct` is created by [`Input::into_iter()`].
#[derive(Debug, Clone)]
pub struct IntoIter<E>(vec::IntoIter<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::Input;

    #[test]
    fn normalize() {
        assert_eq!(Input::<i32>::Chunk(vec![]).normalize(), Input::Empty);
        assert_eq!(Input::Chunk(vec![1]).normalize(), Input::Element(1));
        assert_eq!(Input::Chunk(vec![1, 2]).normalize(), Input::Chunk(vec![1, 2]));
        assert_eq!(Input::<i32>::EndOfStream.normalize(), Input::EndOfStream);
    }

    #[test]
    fn emptiness() {
        assert!(Input::<i32>::Empty.is_empty());
        assert!(Input::<i32>::Chunk(vec![]).is_empty());
        assert!(!Input::Element(1).is_empty());
        assert!(!Input::<i32>::EndOfStream.is_empty());
        assert!(Input::<i32>::EndOfStream.is_end());
    }

    #[test]
    fn fold_picks_one_handler() {
        let describe = |input: Input<i32>| {
            input.fold(
                || "empty".to_owned(),
                |e| format!("element {e}"),
                |items| format!("chunk of {}", items.len()),
                || "end".to_owned(),
            )
        };

        assert_eq!(describe(Input::Empty), "empty");
        assert_eq!(describe(Input::Element(3)), "element 3");
        assert_eq!(describe(Input::Chunk(vec![1, 2])), "chunk of 2");
        assert_eq!(describe(Input::EndOfStream), "end");
    }

    #[test]
    fn shorter() {
        let chunk = || Input::Chunk(vec![1, 2, 3]);

        assert_eq!(chunk().shorter(Input::Element(3)), Input::Element(3));
        assert_eq!(Input::Element(3).shorter(chunk()), Input::Element(3));
        assert_eq!(chunk().shorter(Input::EndOfStream), Input::EndOfStream);
        assert_eq!(Input::<i32>::Empty.shorter(Input::EndOfStream), Input::EndOfStream);
        // Ties keep the left side.
        assert_eq!(Input::Element(1).shorter(Input::Element(2)), Input::Element(1));
    }

    #[test]
    fn into_iter() {
        assert!(Input::<i32>::EndOfStream.into_iter().next().is_none());
        assert_eq!(Input::Chunk(vec![1, 2]).into_iter().collect::<Vec<_>>(), [1, 2]);
        assert_eq!(Input::Element(9).into_iter().collect::<Vec<_>>(), [9]);
    }
}
