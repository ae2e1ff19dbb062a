use std::ops::ControlFlow;

use futures::{
    FutureExt,
    future::{self, LocalBoxFuture},
};

use super::{Effect, Functor, Monad};

/// An asynchronous context: `Task::Of<T>` is a boxed, single-threaded future.
///
/// Iteratees over `Task` only describe the work; an executor drives it.
///
/// # Examples
///
/// ```
/// use futures::executor::block_on;
/// use iteratee::{prelude::*, consumers::sum};
///
/// let total = sum::<i64, Task>().process(enumerate([1, 2, 3]));
/// assert_eq!(block_on(total), 6);
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Task;

impl Effect for Task {
    type Of<T> = LocalBoxFuture<'static, T>;
}

impl Functor for Task {
    fn map<A: 'static, B: 'static>(
        fa: LocalBoxFuture<'static, A>,
        f: impl FnOnce(A) -> B + 'static,
    ) -> LocalBoxFuture<'static, B> {
        fa.map(f).boxed_local()
    }
}

impl Monad for Task {
    fn pure<A: 'static>(a: A) -> LocalBoxFuture<'static, A> {
        future::ready(a).boxed_local()
    }

    fn bind<A: 'static, B: 'static>(
        fa: LocalBoxFuture<'static, A>,
        f: impl FnOnce(A) -> LocalBoxFuture<'static, B> + 'static,
    ) -> LocalBoxFuture<'static, B> {
        async move { f(fa.await).await }.boxed_local()
    }

    fn tail_rec<S: 'static, B: 'static>(
        init: S,
        mut f: impl FnMut(S) -> LocalBoxFuture<'static, ControlFlow<B, S>> + 'static,
    ) -> LocalBoxFuture<'static, B> {
        async move {
            let mut state = init;
            loop {
                match f(state).await {
                    ControlFlow::Continue(next) => state = next,
                    ControlFlow::Break(b) => return b,
                }
            }
        }
        .boxed_local()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::ops::ControlFlow;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn bind_awaits_in_order() {
        let fut = Task::bind(Task::pure(20), |n| Task::map(Task::pure(n), |n| n + 1));
        assert_eq!(block_on(fut), 21);
    }

    #[test]
    fn tail_rec_loops() {
        let fut = Task::tail_rec(0_u32, |i| {
            Task::pure(if i < 10_000 {
                ControlFlow::Continue(i + 1)
            } else {
                ControlFlow::Break(i)
            })
        });
        assert_eq!(block_on(fut), 10_000);
    }
}
