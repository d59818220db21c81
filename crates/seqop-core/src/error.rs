use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical result for fail-fast terminal operators.
pub type Result<T> = std::result::Result<T, EmptySequenceError>;

/// Raised by the fail-fast terminals (`first`, `last`, `max` and their
/// predicated forms) when no qualifying element exists.
///
/// The `*_or_default` terminals never raise this; they substitute the item
/// type's zero value instead. `average` also never raises it (an empty
/// source averages to `0.0`) -- that asymmetry with `max` is part of the
/// observable contract, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EmptySequenceError {
    #[error("sequence contains no elements")]
    NoElements,

    #[error("sequence contains no elements matching the predicate")]
    NoMatch,
}
