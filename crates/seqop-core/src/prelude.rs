//! Convenient re-exports for downstream crates.

pub use crate::error::{EmptySequenceError, Result};
pub use crate::materialized::List;
pub use crate::sequence::{Sequence, SequenceIter};
pub use crate::source::{empty, from_fn, from_iter, Empty, FromFn, IterSource};
