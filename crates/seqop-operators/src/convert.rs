//! Conversion terminals: materialize a sequence into owned, indexable
//! storage.
//!
//! Both terminals are a single pass with amortized-doubling growth. There
//! is no pre-count pass to size the output: the sequence contract only
//! guarantees one traversal, so counting first would burn it.

use seqop_core::{List, Sequence};

/// Materialize into a `List`.
pub fn to_list<S: Sequence>(mut seq: S) -> List<S::Item> {
    let mut list = List::new();
    while let Some(item) = seq.next_item() {
        list.push(item);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len = list.len(), "materialized sequence into list");
    list
}

/// Materialize into an exact-size boxed slice.
pub fn to_array<S: Sequence>(mut seq: S) -> Box<[S::Item]> {
    let mut items = Vec::new();
    while let Some(item) = seq.next_item() {
        items.push(item);
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(len = items.len(), "materialized sequence into array");
    items.into_boxed_slice()
}
