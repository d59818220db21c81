#![forbid(unsafe_code)]
//! seqop-core: the sequence capability, its sources, materialized storage,
//! and the error surface shared by every operator family.
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async, no I/O).
//! - `Sequence` is the minimal pull contract; everything chainable lives in
//!   `seqop-operators` so this crate stays dependency-light.

pub mod error;
pub mod materialized;
pub mod prelude;
pub mod sequence;
pub mod source;

pub use error::{EmptySequenceError, Result};
pub use materialized::List;
pub use sequence::{Sequence, SequenceIter};
pub use source::{empty, from_fn, from_iter};
