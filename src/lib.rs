#![forbid(unsafe_code)]
//! seqop: composable sequence operators with deferred execution.
//!
//! A pipeline starts from a source (`from_iter`, `from_fn`, `empty`),
//! threads through lazy adapters (`filter`, `select`, `take`, ...) and
//! ends at a terminal operator that forces traversal: element access
//! (`first`, `last`, ...), aggregation (`count`, `any`, `average`, `max`),
//! or conversion (`to_list`, `to_array`). Ordering (`order_by`,
//! `order_by_descending`) works on the materialized `List` form only.
//!
//! ```
//! use seqop::prelude::*;
//!
//! let evens = from_iter(1..=10)
//!     .filter(|x| x % 2 == 0)
//!     .select(|x| x * x)
//!     .take(3)
//!     .to_list();
//! assert_eq!(evens.as_slice(), &[4, 16, 36]);
//! ```

pub use seqop_core::{
    empty, from_fn, from_iter, EmptySequenceError, List, Result, Sequence, SequenceIter,
};
pub use seqop_operators::SequenceExt;

pub mod prelude {
    //! Everything a pipeline consumer needs.
    pub use seqop_core::prelude::*;
    pub use seqop_operators::SequenceExt;
}
