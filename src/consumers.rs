//! Ready-made consumers.
//!
//! Every consumer here is generic over the element type `E` and the effect
//! context `F`, and honors the leftover discipline: whatever it receives but
//! does not use is handed back in the [`Done`](crate::Step::Done) leftover,
//! with chunks split at the exact boundary.
//!
//! # Examples
//!
//! ```
//! use iteratee::{prelude::*, consumers::{drop_while, take_while, consume}};
//!
//! let words = drop_while::<char, Id>(|c| c.is_whitespace())
//!     .flat_map(|()| take_while(|c: &char| c.is_alphabetic()))
//!     .flat_map(|word| consume().map(move |rest| (word, rest)))
//!     .process(enumerate_chunks([vec![' ', ' ', 'h', 'i'], vec!['!', '?']]));
//!
//! assert_eq!(words, (vec!['h', 'i'], vec!['!', '?']));
//! ```

mod consume;
mod drop;
mod fold;
mod head;
mod take;

pub use consume::*;
pub use drop::*;
pub use fold::*;
pub use head::*;
pub use take::*;
