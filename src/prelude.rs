//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the core types, the built-in effect contexts and
//! the enumerators.
//!
//! # Example
//!
//! ```
//! use iteratee::prelude::*;
//! ```

pub use crate::effect::{Comonad, Effect, Eval, Fallible, Functor, Id, Monad, Thunk};
#[cfg(feature = "futures")]
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
pub use crate::effect::Task;
pub use crate::enumerator::{enumerate, enumerate_chunks, enumerate_inputs};
pub use crate::{Enumeratee, Enumerator, Input, Iteratee, Step};
