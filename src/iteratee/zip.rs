use crate::{Input, Iteratee, Step, effect::Monad};

impl<E, F, A> Iteratee<E, F, A>
where
    E: Clone + 'static,
    F: Monad,
    A: 'static,
{
    /// Runs two consumers over the same stream in lockstep and pairs their
    /// results.
    ///
    /// Every input goes to both consumers while both are running. Once one
    /// of them is done, its result is held and the input only goes to the
    /// other. If both finish on the same input, the combined leftover is the
    /// [`shorter()`](Input::shorter) of the two.
    ///
    /// # Examples
    ///
    /// ```
    /// use iteratee::{prelude::*, consumers::{length, take}};
    ///
    /// let (front, n) = take::<_, Id>(2)
    ///     .zip(length())
    ///     .process(enumerate([1, 2, 3, 4]));
    ///
    /// assert_eq!(front, [1, 2]);
    /// assert_eq!(n, 4);
    /// ```
    pub fn zip<B: 'static>(self, other: Iteratee<E, F, B>) -> Iteratee<E, F, (A, B)> {
        self.advance(move |left| other.advance(move |right| zip_steps(left, right)))
    }
}

fn zip_steps<E, F, A, B>(left: Step<E, F, A>, right: Step<E, F, B>) -> Iteratee<E, F, (A, B)>
where
    E: Clone + 'static,
    F: Monad,
    A: 'static,
    B: 'static,
{
    match (left, right) {
        (Step::Done(a, left_over), Step::Done(b, right_over)) => {
            Iteratee::done((a, b), left_over.shorter(right_over))
        }
        // The running side has seen everything the finished side has,
        // so its leftover is the one to report.
        (Step::Done(a, _), right) => Iteratee::from_step(right).map(move |b| (a, b)),
        (left, Step::Done(b, _)) => Iteratee::from_step(left).map(move |a| (a, b)),
        (Step::Continue(left), Step::Continue(right)) => Iteratee::cont(move |input: Input<E>| {
            let left = left(input.clone());
            let right = right(input);
            left.advance(move |left| right.advance(move |right| zip_steps(left, right)))
        }),
    }
}
