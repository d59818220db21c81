//! Projection: map each element to a new value.
//!
//! Projection here is lazy throughout, like the rest of the pipeline: the
//! transformer runs only as the consumer pulls. Nothing is materialized
//! until a conversion terminal asks for it.

use seqop_core::Sequence;

/// Lazy element transform.
pub struct Select<S, F> {
    source: S,
    transformer: F,
}

impl<S, F> Select<S, F> {
    pub(crate) fn new(source: S, transformer: F) -> Self {
        Self {
            source,
            transformer,
        }
    }
}

impl<S, F, U> Sequence for Select<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next_item(&mut self) -> Option<Self::Item> {
        self.source.next_item().map(&mut self.transformer)
    }
}
