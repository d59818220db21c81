//! Filtering operators: lazily narrow a sequence.
//!
//! Every adapter here holds its own cursor into its upstream and advances
//! only when pulled. `Distinct` is the documented exception: it must see
//! the whole source before it can emit anything, so it buffers on the
//! first pull.

use std::collections::HashSet;
use std::hash::Hash;

use seqop_core::Sequence;

/// Lazy predicate filter. Each pull advances the source until the
/// predicate holds or the source exhausts; the predicate runs at most once
/// per source element actually visited.
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.source.next_item() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }
}

/// Deduplication by value equality. Fully consumes the source into a hash
/// set on the first pull; emits each unique value exactly once, in the
/// set's internal iteration order, which is NOT guaranteed to match input
/// order.
pub struct Distinct<S: Sequence> {
    source: Option<S>,
    uniques: Option<std::collections::hash_set::IntoIter<S::Item>>,
}

impl<S: Sequence> Distinct<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source: Some(source),
            uniques: None,
        }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Eq + Hash,
{
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        if let Some(mut source) = self.source.take() {
            let mut set = HashSet::new();
            while let Some(item) = source.next_item() {
                set.insert(item);
            }
            self.uniques = Some(set.into_iter());
        }
        self.uniques.as_mut().and_then(|u| u.next())
    }
}

/// At most the first `n` elements, in order. Never pulls the source again
/// once `n` elements were produced.
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(source: S, n: usize) -> Self {
        Self {
            source,
            remaining: n,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.source.next_item()
    }
}

/// The longest prefix satisfying the predicate. The first failing element
/// is consumed and discarded; no further pulls happen after that.
pub struct TakeWhile<S, P> {
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_item() {
            Some(item) if (self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Everything after the first `n` elements. The discard happens lazily, on
/// the first pull; a source shorter than `n` yields nothing.
pub struct Skip<S> {
    source: S,
    to_skip: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(source: S, n: usize) -> Self {
        Self { source, to_skip: n }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        while self.to_skip > 0 {
            self.to_skip -= 1;
            self.source.next_item()?;
        }
        self.source.next_item()
    }
}

/// Discards the leading run satisfying the predicate. Once the predicate
/// fails once the latch flips: every later element is emitted
/// unconditionally, including ones that would satisfy the predicate.
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
    skipping: bool,
}

impl<S, P> SkipWhile<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            skipping: true,
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        while let Some(item) = self.source.next_item() {
            if self.skipping && (self.predicate)(&item) {
                continue;
            }
            self.skipping = false;
            return Some(item);
        }
        None
    }
}
