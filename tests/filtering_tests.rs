//! Filtering operator tests: laziness, call counts, and value semantics.

use seqop::prelude::*;

/// A source that counts how many times it was pulled.
fn counting_source(limit: i32, pulls: &mut i32) -> impl Sequence<Item = i32> + '_ {
    let mut n = 0;
    from_fn(move || {
        if n >= limit {
            return None;
        }
        *pulls += 1;
        n += 1;
        Some(n)
    })
}

#[test]
fn test_filter_keeps_matching_elements_in_order() {
    let result = from_iter(1..=10).filter(|x| x % 2 == 0).to_list();
    assert_eq!(result.into_vec(), vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_filter_take_invokes_predicate_only_for_visited_elements() {
    // 100-element source, matches at 10, 20, 30, ... Taking two means the
    // predicate must run at most 20 times, never all 100.
    let mut calls = 0;
    let result = from_iter(1..=100)
        .filter(|x| {
            calls += 1;
            x % 10 == 0
        })
        .take(2)
        .to_list();
    assert_eq!(result.into_vec(), vec![10, 20]);
    assert!(calls <= 20, "predicate ran {} times, expected <= 20", calls);
}

#[test]
fn test_filter_is_deferred_until_pulled() {
    let mut calls = 0;
    let pipeline = from_iter(1..=100).filter(|_x: &i32| {
        calls += 1;
        true
    });
    drop(pipeline);
    assert_eq!(calls, 0, "predicate must not run at composition time");
}

#[test]
fn test_distinct_deduplicates_by_value() {
    let mut result = from_iter(vec![1, 2, 2, 3, 1]).distinct().to_list().into_vec();
    result.sort();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_distinct_count_is_unique_count() {
    assert_eq!(from_iter(vec![1, 2, 2, 3, 1]).distinct().count(), 3);
}

#[test]
fn test_take_yields_prefix() {
    let result = from_iter(1..=10).take(3).to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_zero_is_empty() {
    let result = from_iter(1..=10).take(0).to_list();
    assert!(result.is_empty());
}

#[test]
fn test_take_more_than_available() {
    let result = from_iter(1..=3).take(10).to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_does_not_over_read_the_source() {
    let mut pulls = 0;
    let result = counting_source(100, &mut pulls).take(3).to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
    assert_eq!(pulls, 3, "take(3) must pull the source exactly 3 times");
}

#[test]
fn test_take_while_stops_at_first_failure() {
    let result = from_iter(vec![1, 2, 3, 10, 2]).take_while(|x| *x < 5).to_list();
    // Stops at 10 and ignores the trailing 2 even though it satisfies the
    // predicate.
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_take_while_pulls_nothing_after_failure() {
    let mut pulls = 0;
    let result = counting_source(100, &mut pulls)
        .take_while(|x| *x <= 3)
        .to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
    // The failing element (4) is consumed and discarded; nothing beyond it.
    assert_eq!(pulls, 4);
}

#[test]
fn test_skip_discards_prefix() {
    let result = from_iter(1..=5).skip(2).to_list();
    assert_eq!(result.into_vec(), vec![3, 4, 5]);
}

#[test]
fn test_skip_past_end_is_empty() {
    let result = from_iter(1..=3).skip(10).to_list();
    assert!(result.is_empty());
}

#[test]
fn test_skip_while_latch_only_flips_once() {
    // 3 and 4 satisfy the predicate but come after the first failure (10),
    // so they are emitted unconditionally.
    let result = from_iter(vec![1, 2, 10, 3, 4]).skip_while(|x| *x < 5).to_list();
    assert_eq!(result.into_vec(), vec![10, 3, 4]);
}

#[test]
fn test_skip_while_everything_matches_is_empty() {
    let result = from_iter(vec![1, 2, 3]).skip_while(|x| *x < 5).to_list();
    assert!(result.is_empty());
}
