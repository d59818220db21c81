//! Concrete sequence sources.
//!
//! The deliberate absence here: no blanket `impl Sequence for I: Iterator`.
//! Wrapping through `from_iter` keeps operator names (`take`, `count`,
//! `any`, ...) unambiguous next to `Iterator`'s inherent methods when both
//! traits are in scope.

use crate::sequence::Sequence;

/// A sequence backed by any iterator. The entry point of every pipeline
/// over existing data.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

/// Wrap an iterable as a sequence.
pub fn from_iter<I: IntoIterator>(iterable: I) -> IterSource<I::IntoIter> {
    IterSource {
        iter: iterable.into_iter(),
    }
}

impl<I: Iterator> Sequence for IterSource<I> {
    type Item = I::Item;

    fn next_item(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

/// A sequence backed by a closure. May be infinite; bounding it (with
/// `take`/`take_while`) is the caller's responsibility.
pub struct FromFn<F> {
    f: F,
}

/// Build a sequence from a producer closure; `None` ends the sequence.
pub fn from_fn<T, F: FnMut() -> Option<T>>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<T, F: FnMut() -> Option<T>> Sequence for FromFn<F> {
    type Item = T;

    fn next_item(&mut self) -> Option<Self::Item> {
        (self.f)()
    }
}

/// The empty sequence.
#[derive(Debug, Clone, Default)]
pub struct Empty<T> {
    _marker: std::marker::PhantomData<T>,
}

pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: std::marker::PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;

    fn next_item(&mut self) -> Option<Self::Item> {
        None
    }
}
