//! Element access terminals: extract a single element from a sequence.
//!
//! Two policies, both part of the observable contract:
//! - fail-fast forms return `Err(EmptySequenceError)` when no qualifying
//!   element exists (empty source, or predicate matched nothing);
//! - `*_or_default` forms substitute the item type's zero value instead.
//!
//! `last` needs a full forward scan: the sequence contract grants no
//! reverse traversal. The scan is a single pass, so single-pass sources
//! work.

use seqop_core::{EmptySequenceError, Result, Sequence};

/// First element, or `NoElements` on an empty source.
pub fn first<S: Sequence>(mut seq: S) -> Result<S::Item> {
    seq.next_item().ok_or(EmptySequenceError::NoElements)
}

/// First element matching the predicate, or `NoMatch` if none does --
/// including on a non-empty source with no match.
pub fn first_where<S, P>(mut seq: S, mut predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    while let Some(item) = seq.next_item() {
        if predicate(&item) {
            return Ok(item);
        }
    }
    Err(EmptySequenceError::NoMatch)
}

/// First element, or the type's zero value on an empty source.
pub fn first_or_default<S>(mut seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    seq.next_item().unwrap_or_default()
}

/// First match, or the type's zero value if none.
pub fn first_or_default_where<S, P>(seq: S, predicate: P) -> S::Item
where
    S: Sequence,
    S::Item: Default,
    P: FnMut(&S::Item) -> bool,
{
    first_where(seq, predicate).unwrap_or_default()
}

/// Last element, by full forward scan; `NoElements` on an empty source.
pub fn last<S: Sequence>(mut seq: S) -> Result<S::Item> {
    let mut last = None;
    while let Some(item) = seq.next_item() {
        last = Some(item);
    }
    last.ok_or(EmptySequenceError::NoElements)
}

/// Last element matching the predicate, or `NoMatch` if none does.
pub fn last_where<S, P>(mut seq: S, mut predicate: P) -> Result<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut last = None;
    while let Some(item) = seq.next_item() {
        if predicate(&item) {
            last = Some(item);
        }
    }
    last.ok_or(EmptySequenceError::NoMatch)
}

/// Last element, or the type's zero value on an empty source.
pub fn last_or_default<S>(seq: S) -> S::Item
where
    S: Sequence,
    S::Item: Default,
{
    last(seq).unwrap_or_default()
}

/// Last match, or the type's zero value if none.
pub fn last_or_default_where<S, P>(seq: S, predicate: P) -> S::Item
where
    S: Sequence,
    S::Item: Default,
    P: FnMut(&S::Item) -> bool,
{
    last_where(seq, predicate).unwrap_or_default()
}
