//! Aggregation terminals: reduce a sequence to a scalar.
//!
//! `average` returns `0.0` on an empty source while `max` fails; the
//! asymmetry is deliberate and part of the observable contract (see
//! `EmptySequenceError`).

use seqop_core::{EmptySequenceError, Result, Sequence};

/// Number of elements, by full scan.
pub fn count<S: Sequence>(mut seq: S) -> usize {
    let mut n = 0;
    while seq.next_item().is_some() {
        n += 1;
    }
    n
}

/// Number of elements matching the predicate, by full scan.
pub fn count_where<S, P>(mut seq: S, mut predicate: P) -> usize
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    let mut n = 0;
    while let Some(item) = seq.next_item() {
        if predicate(&item) {
            n += 1;
        }
    }
    n
}

/// Whether the sequence has at least one element. Short-circuits on the
/// first pull; never counts the rest, so single-pass and unbounded sources
/// are fine.
pub fn any<S: Sequence>(mut seq: S) -> bool {
    seq.next_item().is_some()
}

/// Arithmetic mean of the elements, as `f64`; `0.0` on an empty source
/// (this terminal never fails).
pub fn average<S>(seq: S) -> f64
where
    S: Sequence,
    S::Item: Into<f64>,
{
    average_by(seq, |item| item)
}

/// Arithmetic mean of an extracted key, as `f64`; `0.0` on an empty
/// source. Streams sum and count in one pass.
pub fn average_by<S, K, F>(mut seq: S, mut key: F) -> f64
where
    S: Sequence,
    K: Into<f64>,
    F: FnMut(S::Item) -> K,
{
    let mut sum = 0.0;
    let mut n: u64 = 0;
    while let Some(item) = seq.next_item() {
        sum += key(item).into();
        n += 1;
    }
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Streaming maximum. The accumulator starts empty and is filled on the
/// first element, so no sentinel seed value (and none of its boundary
/// bugs) is involved. `NoElements` on an empty source.
pub fn max<S>(mut seq: S) -> Result<S::Item>
where
    S: Sequence,
    S::Item: PartialOrd,
{
    let mut best: Option<S::Item> = None;
    while let Some(item) = seq.next_item() {
        match &best {
            Some(b) if !(item > *b) => {}
            _ => best = Some(item),
        }
    }
    best.ok_or(EmptySequenceError::NoElements)
}
