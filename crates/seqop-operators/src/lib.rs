#![forbid(unsafe_code)]
//! seqop-operators: the operator families (filter/project/element/agg/sort/convert).
//!
//! Design intent:
//! - Keep this crate pure and synchronous (no async).
//! - One explicit iterator state machine per lazy operator; execution
//!   suspends at each operator's cursor and resumes on the next pull.
//! - Only the terminals (element access, aggregation, conversion) and the
//!   ordering family force traversal; everything else stays deferred.

pub mod aggregate;
pub mod convert;
pub mod element;
pub mod filter;
pub mod project;
pub mod sort;
pub mod traits;

pub use filter::{Distinct, Filter, Skip, SkipWhile, Take, TakeWhile};
pub use project::Select;
pub use sort::Reverse;
pub use traits::SequenceExt;
