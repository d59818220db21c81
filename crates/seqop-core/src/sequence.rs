//! The pull-based sequence capability.
//!
//! A `Sequence` is anything that can produce ordered items on demand. The
//! minimum contract is a single traversal; whether a source can be replayed
//! is the source's business, never assumed here. Operator chaining lives in
//! `seqop-operators` (`SequenceExt`), which builds one explicit state
//! machine per lazy operator on top of this trait.

/// Pull-based, single-responsibility producer of ordered items.
///
/// Invariants:
/// - `next_item` returning `None` means the sequence is exhausted; callers
///   must not rely on any behavior after that point.
/// - Implementations pull from their upstream only when pulled themselves
///   (deferred execution); buffering operators document the exception.
pub trait Sequence {
    type Item;

    /// Produce the next item, or `None` when the sequence is exhausted.
    fn next_item(&mut self) -> Option<Self::Item>;
}

// A sequence behind a mutable reference is still a sequence, so terminals
// can consume a borrowed pipeline without taking ownership.
impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        (**self).next_item()
    }
}

/// Bridge from the sequence world back into `Iterator` land, for `for`
/// loops and `collect` at the consumer boundary.
#[derive(Debug, Clone)]
pub struct SequenceIter<S> {
    seq: S,
}

impl<S> SequenceIter<S> {
    pub fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.next_item()
    }
}
