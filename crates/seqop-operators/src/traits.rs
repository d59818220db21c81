//! The chaining surface for sequence pipelines.
//!
//! `SequenceExt` is implemented for every `Sequence` and is how consumers
//! compose operators: lazy adapters return another sequence, terminals
//! consume the pipeline and return a scalar or owned storage.
//!
//! Only the terminals and `reverse`/`distinct` (which must see the whole
//! source) force traversal; `filter`, `select`, `take`, `take_while`,
//! `skip` and `skip_while` stay deferred until something pulls.

use std::hash::Hash;

use seqop_core::{List, Result, Sequence, SequenceIter};

use crate::aggregate;
use crate::convert;
use crate::element;
use crate::filter::{Distinct, Filter, Skip, SkipWhile, Take, TakeWhile};
use crate::project::Select;
use crate::sort::Reverse;

pub trait SequenceExt: Sequence + Sized {
    // ---- filtering (lazy) ----

    /// Keep only elements satisfying the predicate.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Deduplicate by value equality. Buffers the whole source on the
    /// first pull; output order is the hash set's, not the input's.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: Eq + Hash,
    {
        Distinct::new(self)
    }

    /// At most the first `n` elements.
    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    /// The longest prefix satisfying the predicate; the first failing
    /// element is consumed and discarded.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Everything after the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self> {
        Skip::new(self, n)
    }

    /// Discard the leading run satisfying the predicate; once it fails,
    /// everything else comes through unconditionally.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    // ---- projection (lazy) ----

    /// Transform each element. The transformer runs only as the consumer
    /// pulls.
    fn select<F, U>(self, transformer: F) -> Select<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        Select::new(self, transformer)
    }

    // ---- ordering ----

    /// Elements in reverse input order. Buffers once; O(n).
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    // ---- element access (terminal) ----

    fn first(self) -> Result<Self::Item> {
        element::first(self)
    }

    fn first_where<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        element::first_where(self, predicate)
    }

    fn first_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::first_or_default(self)
    }

    fn first_or_default_where<P>(self, predicate: P) -> Self::Item
    where
        Self::Item: Default,
        P: FnMut(&Self::Item) -> bool,
    {
        element::first_or_default_where(self, predicate)
    }

    fn last(self) -> Result<Self::Item> {
        element::last(self)
    }

    fn last_where<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        element::last_where(self, predicate)
    }

    fn last_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        element::last_or_default(self)
    }

    fn last_or_default_where<P>(self, predicate: P) -> Self::Item
    where
        Self::Item: Default,
        P: FnMut(&Self::Item) -> bool,
    {
        element::last_or_default_where(self, predicate)
    }

    // ---- aggregation (terminal) ----

    fn count(self) -> usize {
        aggregate::count(self)
    }

    fn count_where<P>(self, predicate: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        aggregate::count_where(self, predicate)
    }

    /// Whether at least one element exists. Short-circuits on the first
    /// pull.
    fn any(self) -> bool {
        aggregate::any(self)
    }

    /// Arithmetic mean as `f64`; `0.0` on an empty source.
    fn average(self) -> f64
    where
        Self::Item: Into<f64>,
    {
        aggregate::average(self)
    }

    /// Arithmetic mean of an extracted key; `0.0` on an empty source.
    fn average_by<K, F>(self, key: F) -> f64
    where
        K: Into<f64>,
        F: FnMut(Self::Item) -> K,
    {
        aggregate::average_by(self, key)
    }

    /// Streaming maximum; fails on an empty source.
    fn max(self) -> Result<Self::Item>
    where
        Self::Item: PartialOrd,
    {
        aggregate::max(self)
    }

    // ---- conversion (terminal) ----

    /// Materialize into a `List` (single pass, amortized growth).
    fn to_list(self) -> List<Self::Item> {
        convert::to_list(self)
    }

    /// Materialize into an exact-size boxed slice (single pass).
    fn to_array(self) -> Box<[Self::Item]> {
        convert::to_array(self)
    }

    // ---- boundary ----

    /// Bridge into `Iterator` land for `for` loops and `collect`.
    fn into_iter(self) -> SequenceIter<Self> {
        SequenceIter::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
