//! Scalar queries: any/all, count, contains and sequence comparison.
//!
//! ## Purpose
//!
//! This module provides the operators that answer a yes/no or counting
//! question about a sequence, or compare two sequences element by element.
//!
//! ## Design notes
//!
//! * **Short-circuit**: `any_where`, `all`, `contains` and `sequence_equal`
//!   stop at the first decisive element.
//! * **Identity fast path**: `sequence_equal` treats two views of the same
//!   memory as equal without visiting elements.
//! * **Pointwise**: `sequence_compare` produces one ordering per index, not a
//!   lexicographic verdict.
//!
//! ## Invariants
//!
//! * `sequence_equal` on unequal lengths is `false`, never an error.
//! * `sequence_compare` on unequal lengths is `NotSupported`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::ptr;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::comparer;
use crate::primitives::errors::SequenceError;
use crate::primitives::sequence::{FromExact, Sequence};

// ============================================================================
// Any / All
// ============================================================================

/// Whether `source` has any element.
#[inline]
pub fn any<S: Sequence + ?Sized>(source: &S) -> bool {
    !source.is_empty()
}

/// Whether any element of `source` satisfies `predicate`.
#[inline]
pub fn any_where<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.as_slice().iter().any(predicate)
}

/// Whether every element of `source` satisfies `predicate`.
///
/// An empty sequence satisfies any predicate.
#[inline]
pub fn all<S, P>(source: &S, predicate: P) -> bool
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    source.as_slice().iter().all(predicate)
}

// ============================================================================
// Count
// ============================================================================

/// The number of elements in `source`.
#[inline]
pub fn count<S: Sequence + ?Sized>(source: &S) -> usize {
    source.len()
}

/// The number of elements of `source` satisfying `predicate`.
pub fn count_where<S, P>(source: &S, mut predicate: P) -> usize
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
{
    let mut n = 0;
    for item in source.as_slice() {
        if predicate(item) {
            n += 1;
        }
    }
    n
}

// ============================================================================
// Contains
// ============================================================================

/// Whether `source` holds an element equal to `value`.
#[inline]
pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: Sequence + ?Sized,
    S::Item: PartialEq,
{
    contains_by(source, value, comparer::equality::<S::Item>())
}

/// Whether `source` holds an element equal to `value` under `equals`.
pub fn contains_by<S, E>(source: &S, value: &S::Item, equals: E) -> bool
where
    S: Sequence + ?Sized,
    E: Fn(&S::Item, &S::Item) -> bool,
{
    source.as_slice().iter().any(|item| equals(item, value))
}

// ============================================================================
// Sequence Equality
// ============================================================================

/// Whether `first` and `second` hold equal elements in the same order.
#[inline]
pub fn sequence_equal<A, B>(first: &A, second: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    sequence_equal_by(first, second, comparer::equality::<A::Item>())
}

/// Whether `first` and `second` hold elements equal under `equals`, pairwise.
///
/// Unequal lengths return `false` without visiting any element. Two views
/// of the same memory return `true` without visiting any element.
pub fn sequence_equal_by<A, B, E>(first: &A, second: &B, equals: E) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    E: Fn(&A::Item, &A::Item) -> bool,
{
    let a = first.as_slice();
    let b = second.as_slice();
    if a.len() != b.len() {
        return false;
    }
    if ptr::eq(a, b) {
        return true;
    }
    a.iter().zip(b).all(|(x, y)| equals(x, y))
}

// ============================================================================
// Sequence Comparison
// ============================================================================

/// Compare `first` and `second` index by index under the natural ordering.
#[inline]
pub fn sequence_compare<A, B>(
    first: &A,
    second: &B,
) -> Result<A::Output<Ordering>, SequenceError>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: Ord,
{
    sequence_compare_by(first, second, comparer::natural::<A::Item>())
}

/// Compare `first` and `second` index by index under `compare`.
///
/// # Errors
///
/// * `NotSupported` if the lengths differ.
pub fn sequence_compare_by<A, B, C>(
    first: &A,
    second: &B,
    compare: C,
) -> Result<A::Output<Ordering>, SequenceError>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    C: Fn(&A::Item, &A::Item) -> Ordering,
{
    let a = first.as_slice();
    let b = second.as_slice();
    Validator::require_same_length(a.len(), b.len())?;

    let mut result = Vec::with_capacity(a.len());
    for (x, y) in a.iter().zip(b) {
        result.push(compare(x, y));
    }
    Ok(FromExact::from_exact(result))
}
