//! Reversal. The in-place key sorts live on `List` in `seqop-core`
//! (`order_by`/`order_by_descending`), next to the container they mutate;
//! this module covers the sequence-facing side of the ordering family.

use seqop_core::Sequence;

/// Elements in reverse input order.
///
/// Buffers the whole source into a vector on the first pull and then pops
/// from the back: O(n) over the whole traversal, one allocation, no
/// front-insertion.
pub struct Reverse<S: Sequence> {
    source: Option<S>,
    buffered: Vec<S::Item>,
}

impl<S: Sequence> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source: Some(source),
            buffered: Vec::new(),
        }
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        if let Some(mut source) = self.source.take() {
            while let Some(item) = source.next_item() {
                self.buffered.push(item);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(len = self.buffered.len(), "buffered source for reversal");
        }
        self.buffered.pop()
    }
}
