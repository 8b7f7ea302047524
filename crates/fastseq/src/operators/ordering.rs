//! Ordering: stable sorts by key, ascending or descending.
//!
//! ## Purpose
//!
//! This module sorts a copy of a sequence by a derived key, or sorts a
//! mutable sequence in place under a caller comparer.
//!
//! ## Design notes
//!
//! * **Copies**: `order_by` and `order_by_descending` clone the source into
//!   one buffer, sort it and hand it to the output shape. The source is never
//!   reordered.
//! * **Keys**: The key selector may run more than once per element, so it
//!   must be pure.
//! * **Descending**: Reverses the key comparison only, so ties still keep
//!   source order.
//!
//! ## Invariants
//!
//! * All sorts are stable.
//! * The output is a permutation of the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::comparer;
use crate::primitives::sequence::{FromExact, Sequence, SequenceMut};

// ============================================================================
// Order By
// ============================================================================

/// A copy of `source` sorted ascending by the key `selector` derives.
///
/// Elements with equal keys keep their relative order.
pub fn order_by<S, K, F>(source: &S, selector: F) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Ord,
    F: Fn(&S::Item) -> K,
{
    sorted_copy(
        source,
        comparer::by_key::<S::Item, K, F, _>(selector, comparer::natural::<K>()),
    )
}

/// A copy of `source` sorted descending by the key `selector` derives.
///
/// Elements with equal keys keep their relative order.
pub fn order_by_descending<S, K, F>(source: &S, selector: F) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Ord,
    F: Fn(&S::Item) -> K,
{
    sorted_copy(
        source,
        comparer::by_key_descending::<S::Item, K, F, _>(selector, comparer::natural::<K>()),
    )
}

// ============================================================================
// In Place
// ============================================================================

/// Stable-sort `source` in place under `compare`.
#[inline]
pub fn order_in_place_by<S, C>(source: &mut S, compare: C)
where
    S: SequenceMut + ?Sized,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    source.as_mut_slice().sort_by(|a, b| compare(a, b));
}

// Clone `source` and stable-sort the copy under `compare`.
fn sorted_copy<S, C>(source: &S, compare: C) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    let mut result: Vec<S::Item> = source.as_slice().to_vec();
    result.sort_by(|a, b| compare(a, b));
    FromExact::from_exact(result)
}
