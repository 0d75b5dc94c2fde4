//! Unit tests for the index calculator.

use carousel_engine::{IndexTriple, compute_triple, wrap};
use std::collections::HashSet;
use std::num::NonZeroUsize;

fn n(count: usize) -> NonZeroUsize {
    NonZeroUsize::new(count).unwrap()
}

#[test]
fn test_wrap_stays_in_range_and_is_periodic() {
    for count in 1..=12usize {
        for position in -50i64..50 {
            let wrapped = wrap(position, n(count));
            assert!(wrapped < count, "wrap({position}, {count}) = {wrapped}");
            assert_eq!(wrapped, wrap(position + count as i64, n(count)));
        }
    }
}

#[test]
fn test_wrap_extreme_positions() {
    assert_eq!(wrap(i64::MIN, n(1)), 0);
    assert!(wrap(i64::MIN, n(7)) < 7);
    assert!(wrap(i64::MAX, n(7)) < 7);
}

#[test]
fn test_triple_distinct_for_three_or_more() {
    for count in 3..=10usize {
        for current in 0..count {
            let triple = compute_triple(current as i64, n(count));
            let distinct: HashSet<usize> = triple.as_array().into_iter().collect();
            assert_eq!(distinct.len(), 3);
            assert_eq!(triple.previous, (current + count - 1) % count);
            assert_eq!(triple.next, (current + 1) % count);
        }
    }
}

#[test]
fn test_scenario_a_triple_at_zero() {
    assert_eq!(
        compute_triple(0, n(5)),
        IndexTriple {
            previous: 4,
            current: 0,
            next: 1
        }
    );
}

#[test]
fn test_two_slides_previous_equals_next() {
    for current in 0..2 {
        let triple = compute_triple(current, n(2));
        assert_eq!(triple.previous, triple.next);
        assert_ne!(triple.current, triple.next);
    }
}
