//! Composable, suspendable stream consumers that produce their result inside
//! a caller-chosen effect context.
//!
//! An [`Iteratee`] consumes a stream piece by piece. Each time it is handed
//! an [`Input`], it either asks for more ([`Step::Continue`]) or finishes
//! with a result and whatever input it did not use ([`Step::Done`]). The
//! unused input, the *leftover*, is offered to whatever consumer runs next,
//! so consumers sequenced over one stream never drop or double-consume data.
//!
//! Where the result lives is up to the caller: [`Id`](effect::Id) for plain
//! synchronous values, [`Fallible`](effect::Fallible) for `Result`s that
//! short-circuit, [`Eval`](effect::Eval) for deferred computations, and
//! [`Task`](effect::Task) for futures. See [`effect`] for how these are
//! encoded.
//!
//! Data is pushed in by an [`Enumerator`], and an [`Enumeratee`] adapts a
//! consumer of one element type into a consumer of another.
//!
//! # Examples
//!
//! Skip a header, then sum the rest, over a stream delivered in uneven
//! chunks:
//!
//! ```
//! use iteratee::{prelude::*, consumers::{drop, sum}};
//!
//! let total = drop::<u32, Id>(2)
//!     .flat_map(|()| sum())
//!     .process(enumerate_chunks([vec![100, 200, 1], vec![2], vec![3, 4]]));
//!
//! assert_eq!(total, 10);
//! ```
//!
//! Two consumers in lockstep, inside a fallible context:
//!
//! ```
//! use iteratee::{prelude::*, consumers::{fold_m, length}};
//!
//! let checked = fold_m::<i32, Fallible<String>, i32>(0, |acc, n| {
//!     if n >= 0 { Ok(acc + n) } else { Err(format!("negative: {n}")) }
//! });
//!
//! let res = checked.zip(length()).process(enumerate([1, 2, 3]));
//! assert_eq!(res, Ok((6, 3)));
//! ```
//!
//! # Features
//!
//! - `std` (default): enables `std` support in the dependencies. Without it,
//!   the crate is `no_std` and only needs `alloc`.
//! - `futures` (default): the [`Task`](effect::Task) context, backed by
//!   [`futures`](https://docs.rs/futures).
//!
//! # Panics
//!
//! A consumer that is still running after it has received
//! [`EndOfStream`](Input::EndOfStream) can never finish. Running it, or
//! flattening it out of an [`Enumeratee`], panics with a message starting
//! with `divergent iteratee`. Failures of the data itself belong in the
//! effect context, e.g. [`Fallible`](effect::Fallible).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod consumers;
pub mod effect;
pub mod enumeratee;
pub mod enumerator;
pub mod ops;
pub mod prelude;

mod input;
mod iteratee;
mod step;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use enumeratee::Enumeratee;
pub use enumerator::Enumerator;
pub use input::*;
pub use iteratee::*;
pub use step::Continuation;
pub use step::Step;
