//! Whole-pipeline tests: composition, conversion, round-trips against
//! reference computations, and bounded consumption of unbounded sources.

use seqop::prelude::*;

#[test]
fn test_select_filter_to_list_round_trip() {
    // to_list(filter(select(S, f), p)) must equal the reference
    // [f(x) for x in S if p(f(x))].
    let f = |x: i32| x * 3;
    let p = |y: &i32| y % 2 == 0;

    let piped = from_iter(1..=20).select(f).filter(p).to_list().into_vec();

    let mut reference = Vec::new();
    for x in 1..=20 {
        let y = f(x);
        if p(&y) {
            reference.push(y);
        }
    }
    assert_eq!(piped, reference);
}

#[test]
fn test_to_array_exact_size_single_pass() {
    let mut pulls = 0;
    let array = from_fn(|| {
        pulls += 1;
        if pulls <= 4 {
            Some(pulls * 10)
        } else {
            None
        }
    })
    .to_array();
    assert_eq!(&*array, &[10, 20, 30, 40]);
    // 4 items plus the exhausting pull; a pre-count pass would double this.
    assert_eq!(pulls, 5);
}

#[test]
fn test_to_list_then_re_enter_pipeline() {
    let list = from_iter(1..=6).filter(|x| x % 2 == 0).to_list();
    let total: usize = list.into_seq().count();
    assert_eq!(total, 3);
}

#[test]
fn test_infinite_source_bounded_by_take() {
    let mut n = 0u64;
    let naturals = from_fn(move || {
        n += 1;
        Some(n)
    });
    let result = naturals.take(5).to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_infinite_source_bounded_by_take_while() {
    let mut n = 0u64;
    let naturals = from_fn(move || {
        n += 1;
        Some(n)
    });
    let result = naturals.take_while(|x| *x < 4).to_list();
    assert_eq!(result.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_sequence_iter_bridge_collects() {
    let doubled: Vec<i32> = from_iter(1..=3).select(|x| x * 2).into_iter().collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_for_loop_over_bridge() {
    let mut seen = Vec::new();
    for x in from_iter(vec!["a", "b"]).into_iter() {
        seen.push(x);
    }
    assert_eq!(seen, vec!["a", "b"]);
}

#[test]
fn test_borrowed_pipeline_can_be_resumed() {
    // &mut Sequence is still a Sequence: a terminal can consume a prefix
    // and leave the rest in place.
    let mut seq = from_iter(1..=5);
    let head = (&mut seq).take(2).to_list();
    assert_eq!(head.into_vec(), vec![1, 2]);
    assert_eq!(seq.to_list().into_vec(), vec![3, 4, 5]);
}

#[test]
fn test_mixed_query_end_to_end() {
    // skip a header run, keep evens, square them, report the top value.
    let result = from_iter(vec![0, 0, 0, 5, 2, 7, 4, 6])
        .skip_while(|x| *x == 0)
        .filter(|x| x % 2 == 0)
        .select(|x| x * x)
        .max();
    assert_eq!(result, Ok(36));
}
