//! Transforms: select (map), select-many (flatten) and filter.
//!
//! ## Purpose
//!
//! This module maps, flattens and filters sequences eagerly, producing an
//! output container of the input's shape family.
//!
//! ## Design notes
//!
//! * **Select**: Allocates exactly `len` slots. The in-place variants
//!   overwrite the source and allocate nothing.
//! * **Filter**: Reserves the worst case (`len`), writes matches densely and
//!   trims to the match count before returning.
//! * **Index-aware variants**: Pass the element's position in `source`.
//!
//! ## Invariants
//!
//! * Selectors and predicates run exactly once per element, in index order.
//! * Output order follows input order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::sequence::{FromExact, Sequence, SequenceMut};

// ============================================================================
// Select
// ============================================================================

/// Map every element of `source` through `selector`.
pub fn select<S, U, F>(source: &S, mut selector: F) -> S::Output<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for item in slice {
        result.push(selector(item));
    }
    FromExact::from_exact(result)
}

/// Map every element of `source` through `selector`, which also receives the index.
pub fn select_indexed<S, U, F>(source: &S, mut selector: F) -> S::Output<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> U,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for (i, item) in slice.iter().enumerate() {
        result.push(selector(item, i));
    }
    FromExact::from_exact(result)
}

/// Replace every element of `source` with `selector` applied to it.
pub fn select_in_place<S, F>(source: &mut S, mut selector: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item) -> S::Item,
{
    for item in source.as_mut_slice() {
        *item = selector(item);
    }
}

/// Replace every element of `source` with `selector` applied to it and its index.
pub fn select_in_place_indexed<S, F>(source: &mut S, mut selector: F)
where
    S: SequenceMut + ?Sized,
    F: FnMut(&S::Item, usize) -> S::Item,
{
    for (i, item) in source.as_mut_slice().iter_mut().enumerate() {
        *item = selector(item, i);
    }
}

// ============================================================================
// Select Many
// ============================================================================

/// Map every element of `source` to a sub-sequence and concatenate the results.
///
/// Output order is outer index first, then each sub-sequence's own order.
pub fn select_many<S, I, F>(source: &S, mut selector: F) -> S::Output<I::Item>
where
    S: Sequence + ?Sized,
    I: IntoIterator,
    F: FnMut(&S::Item) -> I,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for item in slice {
        result.extend(selector(item));
    }
    FromExact::from_exact(result)
}

/// As [`select_many`], with the outer index passed to `selector`.
pub fn select_many_indexed<S, I, F>(source: &S, mut selector: F) -> S::Output<I::Item>
where
    S: Sequence + ?Sized,
    I: IntoIterator,
    F: FnMut(&S::Item, usize) -> I,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for (i, item) in slice.iter().enumerate() {
        result.extend(selector(item, i));
    }
    FromExact::from_exact(result)
}

// ============================================================================
// Filter
// ============================================================================

/// Keep the elements of `source` satisfying `predicate`.
pub fn filter<S, P>(source: &S, mut predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for item in slice {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    FromExact::from_exact(result)
}

/// Keep the elements of `source` satisfying `predicate`, which also receives
/// the element's index in `source`.
pub fn filter_indexed<S, P>(source: &S, mut predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, usize) -> bool,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for (i, item) in slice.iter().enumerate() {
        if predicate(item, i) {
            result.push(item.clone());
        }
    }
    FromExact::from_exact(result)
}
