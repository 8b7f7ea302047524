#![cfg(feature = "dev")]
//! Tests for shape operators.
//!
//! These tests verify the operators that choose or rearrange elements:
//! - Count clamping for take/skip and break points for take-while/skip-while
//! - Allocating and in-place reversal
//! - Zip bounded by the shorter input
//! - Range generation and its width checks
//! - Distinct-in-place sorting, compaction and truncation
//!
//! ## Test Organization
//!
//! 1. **Take / Skip** - Clamping, shapes
//! 2. **Take While / Skip While** - Break points, indices
//! 3. **Reverse** - Allocating and in-place
//! 4. **Zip** - Length bound, shapes
//! 5. **Range** - Values, shapes, argument errors
//! 6. **Distinct** - Natural and custom comparers

use fastseq::internals::operators::shape::*;
use fastseq::internals::primitives::errors::SequenceError;

// ============================================================================
// Take / Skip Tests
// ============================================================================

/// Test `take` count clamping.
///
/// Verifies that negative counts take nothing and large counts take everything.
#[test]
fn test_take_clamps_count() {
    let source = [1, 2, 3];
    assert_eq!(&*take(&source, 2), &[1, 2]);
    assert!(take(&source, -1).is_empty());
    assert!(take(&source, 0).is_empty());
    assert_eq!(&*take(&source, 10), &[1, 2, 3]);
}

/// Test `skip` count clamping.
#[test]
fn test_skip_clamps_count() {
    let source = vec![1, 2, 3];
    assert_eq!(skip(&source, 1), vec![2, 3]);
    assert_eq!(skip(&source, -5), vec![1, 2, 3]);
    assert!(skip(&source, 3).is_empty());
    assert!(skip(&source, isize::MAX).is_empty());
}

/// Test that take and skip reconstruct the source.
#[test]
fn test_take_skip_reconstruct() {
    let source = vec![5, 6, 7, 8];
    for n in 0..=4 {
        let mut joined = take(&source, n);
        joined.extend(skip(&source, n));
        assert_eq!(joined, source);
    }
}

// ============================================================================
// Take While / Skip While Tests
// ============================================================================

/// Test break points at the first failing element.
///
/// Verifies that later elements passing the predicate are not taken.
#[test]
fn test_take_skip_while() {
    let source = [1, 2, 5, 1];
    assert_eq!(&*take_while(&source, |x| *x < 3), &[1, 2]);
    assert_eq!(&*skip_while(&source, |x| *x < 3), &[5, 1]);
}

/// Test break points at the ends.
#[test]
fn test_take_skip_while_edges() {
    let source = vec![1, 2, 3];
    assert_eq!(take_while(&source, |_| true), source);
    assert!(skip_while(&source, |_| true).is_empty());
    assert!(take_while(&source, |_| false).is_empty());
    assert_eq!(skip_while(&source, |_| false), source);
}

/// Test index-aware break points.
#[test]
fn test_take_skip_while_indexed() {
    let source = [9, 9, 9, 9];
    assert_eq!(&*take_while_indexed(&source, |_, i| i < 2), &[9, 9]);
    assert_eq!(&*skip_while_indexed(&source, |_, i| i < 3), &[9]);
}

// ============================================================================
// Reverse Tests
// ============================================================================

/// Test allocating reversal.
#[test]
fn test_reverse() {
    let empty: [i32; 0] = [];
    assert_eq!(&*reverse(&[1, 2, 3]), &[3, 2, 1]);
    assert_eq!(reverse(&vec!["a", "b"]), vec!["b", "a"]);
    assert!(reverse(&empty).is_empty());
}

/// Test in-place reversal.
#[test]
fn test_reverse_in_place() {
    let mut array = [1, 2, 3, 4];
    reverse_in_place(&mut array);
    assert_eq!(array, [4, 3, 2, 1]);

    let mut vector = vec![1, 2, 3, 4, 5];
    reverse_in_place(&mut vector[..3]);
    assert_eq!(vector, vec![3, 2, 1, 4, 5]);
}

/// Test that reversing twice restores the source.
#[test]
fn test_reverse_involution() {
    let source = vec![1, 7, 3];
    assert_eq!(reverse(&reverse(&source)), source);
}

// ============================================================================
// Zip Tests
// ============================================================================

/// Test that the shorter input bounds the output.
#[test]
fn test_zip_length_bound() {
    let numbers = [1, 2, 3];
    let letters = vec!["a", "b"];
    let result = zip(&numbers, &letters, |n, s| format!("{s}{n}"));
    assert_eq!(&*result, &["a1".to_string(), "b2".to_string()]);

    let sums = zip(&vec![1, 2], &[10, 20, 30], |a, b| a + b);
    assert_eq!(sums, vec![11, 22]);
}

/// Test zip with an empty input.
#[test]
fn test_zip_empty() {
    let empty: Vec<i32> = Vec::new();
    let result = zip(&empty, &[1, 2], |a, b| a * b);
    assert!(result.is_empty());
}

// ============================================================================
// Range Tests
// ============================================================================

/// Test range values and shapes.
#[test]
fn test_range_values() {
    let as_vec: Vec<i32> = range(5, 3).unwrap();
    assert_eq!(as_vec, vec![5, 6, 7]);

    let as_box: Box<[u8]> = range(250u8, 6).unwrap();
    assert_eq!(&*as_box, &[250, 251, 252, 253, 254, 255]);

    let empty: Vec<i64> = range(0, 0).unwrap();
    assert!(empty.is_empty());
}

/// Test range at the width's upper bound.
#[test]
fn test_range_upper_bound() {
    let last: Vec<i32> = range(i32::MAX, 1).unwrap();
    assert_eq!(last, vec![i32::MAX]);

    assert_eq!(
        range::<i32, Vec<i32>>(i32::MAX, 2),
        Err(SequenceError::ArgumentOutOfRange("count"))
    );
    assert_eq!(
        range::<u8, Vec<u8>>(250, 7),
        Err(SequenceError::ArgumentOutOfRange("count"))
    );
}

/// Test range with a negative count.
#[test]
fn test_range_negative_count() {
    assert_eq!(
        range::<i32, Box<[i32]>>(0, -1),
        Err(SequenceError::ArgumentOutOfRange("count"))
    );
}

/// Test range with a count too large to allocate.
///
/// Verifies that a count whose last value fits the width, but whose buffer
/// exceeds the address space, is rejected instead of aborting.
#[test]
fn test_range_unallocatable_count() {
    assert_eq!(
        range::<i64, Vec<i64>>(0, i64::MAX),
        Err(SequenceError::ArgumentOutOfRange("count"))
    );
    assert_eq!(
        range::<u64, Box<[u64]>>(0, u64::MAX),
        Err(SequenceError::ArgumentOutOfRange("count"))
    );
}

/// Test range starting at the width's lower bound.
#[test]
fn test_range_lower_bound() {
    let values: Vec<i64> = range(i64::MIN, 2).unwrap();
    assert_eq!(values, vec![i64::MIN, i64::MIN + 1]);
}

// ============================================================================
// Distinct Tests
// ============================================================================

/// Test distinct-in-place sorts and deduplicates.
#[test]
fn test_distinct_in_place() {
    let mut values = vec![3, 1, 2, 1, 3];
    distinct_in_place(&mut values);
    assert_eq!(values, vec![1, 2, 3]);

    distinct_in_place(&mut values);
    assert_eq!(values, vec![1, 2, 3]);
}

/// Test distinct-in-place edge cases.
#[test]
fn test_distinct_in_place_edges() {
    let mut empty: Vec<i32> = Vec::new();
    distinct_in_place(&mut empty);
    assert!(empty.is_empty());

    let mut same = vec![4, 4, 4];
    distinct_in_place(&mut same);
    assert_eq!(same, vec![4]);

    let mut single = vec![7];
    distinct_in_place(&mut single);
    assert_eq!(single, vec![7]);
}

/// Test distinct-in-place with custom comparers.
///
/// Verifies that the first of each equal run is kept after a stable sort.
#[test]
fn test_distinct_in_place_by() {
    let mut words = vec!["b", "A", "a", "B"];
    distinct_in_place_by(
        &mut words,
        |a, b| a.eq_ignore_ascii_case(b),
        |a, b| a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    );
    assert_eq!(words, vec!["A", "b"]);
}

/// Test distinct-in-place on owned elements.
#[test]
fn test_distinct_in_place_strings() {
    let mut words = vec![
        String::from("pear"),
        String::from("apple"),
        String::from("pear"),
    ];
    distinct_in_place(&mut words);
    assert_eq!(words, vec![String::from("apple"), String::from("pear")]);
}
