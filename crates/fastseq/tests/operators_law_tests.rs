#![cfg(feature = "dev")]
//! Property tests for operator laws.
//!
//! These tests check algebraic laws over generated sequences:
//! - Fused operators equal the composition of their unfused steps
//! - Reverse is an involution
//! - Take and skip split a sequence without loss
//! - Distinct-in-place yields a strictly increasing, idempotent result
//! - Sum and average agree
//!
//! ## Test Organization
//!
//! 1. **Fusion** - filter+select, select+filter, filter+sum
//! 2. **Shape** - reverse, take/skip, take-while/skip-while
//! 3. **Distinct** - ordering and idempotence
//! 4. **Numeric** - sum/average agreement, min/max against the standard library

use std::collections::BTreeSet;

use proptest::prelude::*;

use fastseq::internals::operators::fused::{
    filter_select, filter_select_indexed, filter_sum, select_filter,
};
use fastseq::internals::operators::ordering::order_by;
use fastseq::internals::operators::reduction::{average, max, min, sum};
use fastseq::internals::operators::shape::{
    distinct_in_place, reverse, skip, skip_while, take, take_while,
};
use fastseq::internals::operators::transform::{filter, filter_indexed, select, select_indexed};

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000i32..1000, 0..64)
}

proptest! {
    // ========================================================================
    // Fusion Laws
    // ========================================================================

    /// Test `filter_select` equals `filter` then `select`.
    #[test]
    fn test_filter_select_is_composition(xs in small_ints()) {
        let fused = filter_select(&xs, |x| x % 3 == 0, |x| x * 2);
        let composed = select(&filter(&xs, |x| x % 3 == 0), |x| x * 2);
        prop_assert_eq!(fused, composed);
    }

    /// Test `filter_select_indexed` equals the indexed composition.
    #[test]
    fn test_filter_select_indexed_is_composition(xs in small_ints()) {
        let fused = filter_select_indexed(&xs, |x, i| (x + i as i32) % 2 == 0, |x, i| (*x, i));
        let composed = select_indexed(
            &filter_indexed(&xs, |x, i| (x + i as i32) % 2 == 0),
            |x, i| (*x, i),
        );
        prop_assert_eq!(fused, composed);
    }

    /// Test `select_filter` equals `select` then `filter`.
    #[test]
    fn test_select_filter_is_composition(xs in small_ints()) {
        let fused = select_filter(&xs, |x| x - 7, |y| *y > 0);
        let composed = filter(&select(&xs, |x| x - 7), |y| *y > 0);
        prop_assert_eq!(fused, composed);
    }

    /// Test `filter_sum` equals `filter` then `sum`.
    #[test]
    fn test_filter_sum_is_composition(xs in small_ints()) {
        let fused = filter_sum(&xs, |x| *x < 0);
        let composed = sum(&filter(&xs, |x| *x < 0));
        prop_assert_eq!(fused, composed);
    }

    // ========================================================================
    // Shape Laws
    // ========================================================================

    /// Test that reversing twice is the identity.
    #[test]
    fn test_reverse_involution(xs in small_ints()) {
        prop_assert_eq!(reverse(&reverse(&xs)), xs);
    }

    /// Test that take and skip reconstruct the sequence for any count.
    #[test]
    fn test_take_skip_reconstruct(xs in small_ints(), n in -8isize..80) {
        let mut joined = take(&xs, n);
        joined.extend(skip(&xs, n));
        prop_assert_eq!(joined, xs);
    }

    /// Test that take-while and skip-while reconstruct the sequence.
    #[test]
    fn test_take_skip_while_reconstruct(xs in small_ints(), bound in -1000i32..1000) {
        let mut joined = take_while(&xs, |x| *x < bound);
        joined.extend(skip_while(&xs, |x| *x < bound));
        prop_assert_eq!(joined, xs);
    }

    /// Test that order-by matches the standard stable sort.
    #[test]
    fn test_order_by_matches_stable_sort(xs in small_ints()) {
        let mut expected = xs.clone();
        expected.sort_by_key(|x| x.abs());
        prop_assert_eq!(order_by(&xs, |x| x.abs()), expected);
    }

    // ========================================================================
    // Distinct Laws
    // ========================================================================

    /// Test that distinct-in-place yields the sorted set of elements.
    #[test]
    fn test_distinct_in_place_is_sorted_set(xs in small_ints()) {
        let mut values = xs.clone();
        distinct_in_place(&mut values);

        let expected: Vec<i32> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(&values, &expected);

        distinct_in_place(&mut values);
        prop_assert_eq!(values, expected);
    }

    // ========================================================================
    // Numeric Laws
    // ========================================================================

    /// Test that the average equals the sum divided by the count.
    #[test]
    fn test_average_agrees_with_sum(xs in prop::collection::vec(-1000i32..1000, 1..64)) {
        let total = sum(&xs).unwrap();
        let mean = average(&xs).unwrap();
        prop_assert_eq!(mean, total as f64 / xs.len() as f64);
    }

    /// Test that min and max agree with the standard iterator extremes.
    #[test]
    fn test_min_max_agree_with_iterator(xs in prop::collection::vec(any::<i64>(), 1..64)) {
        prop_assert_eq!(min(&xs), Ok(*xs.iter().min().unwrap()));
        prop_assert_eq!(max(&xs), Ok(*xs.iter().max().unwrap()));
    }
}
