//! Fused operators: filter+select, select+filter, filter+aggregate and filter+sum.
//!
//! ## Purpose
//!
//! This module combines two logical steps into one linear pass over the
//! source, with results identical to running the unfused steps in sequence.
//!
//! ## Design notes
//!
//! * **filter_select**: Tests the original element, then maps the matches.
//! * **select_filter**: Maps every element, then tests the *mapped* value.
//!   The predicate's input type differs from `filter_select`, so the two are
//!   not interchangeable.
//! * **Indices**: Index-aware variants pass the same index the unfused
//!   composition would. For `filter_select_indexed` the predicate sees the
//!   source index and the selector sees the dense output index. For
//!   `select_filter_indexed` both see the source index.
//!
//! ## Key concepts
//!
//! ### Aggregate seeding
//! 1. **Implicit seed**: the first matching element seeds the accumulator;
//!    later matches fold into it. No match yields `T::default()`.
//! 2. **Explicit seed**: every match folds into the caller's seed.
//!
//! ## Invariants
//!
//! * Each closure runs at most once per element.
//! * Filtered outputs are trimmed to the match count.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::numeric::summation::Summable;
use crate::primitives::errors::SequenceError;
use crate::primitives::sequence::{FromExact, Sequence};

// ============================================================================
// Filter + Select
// ============================================================================

/// Map the elements of `source` satisfying `predicate` through `selector`.
pub fn filter_select<S, U, P, F>(source: &S, mut predicate: P, mut selector: F) -> S::Output<U>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(&S::Item) -> U,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for item in slice {
        if predicate(item) {
            result.push(selector(item));
        }
    }
    FromExact::from_exact(result)
}

/// As [`filter_select`] with indices.
///
/// `predicate` receives the element's index in `source`; `selector` receives
/// the index the match will occupy in the output.
pub fn filter_select_indexed<S, U, P, F>(
    source: &S,
    mut predicate: P,
    mut selector: F,
) -> S::Output<U>
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item, usize) -> bool,
    F: FnMut(&S::Item, usize) -> U,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for (i, item) in slice.iter().enumerate() {
        if predicate(item, i) {
            let idx = result.len();
            result.push(selector(item, idx));
        }
    }
    FromExact::from_exact(result)
}

// ============================================================================
// Select + Filter
// ============================================================================

/// Map every element of `source` through `selector`, keeping the mapped
/// values that satisfy `predicate`.
pub fn select_filter<S, U, F, P>(source: &S, mut selector: F, mut predicate: P) -> S::Output<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
    P: FnMut(&U) -> bool,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for item in slice {
        let mapped = selector(item);
        if predicate(&mapped) {
            result.push(mapped);
        }
    }
    FromExact::from_exact(result)
}

/// As [`select_filter`], with the source index passed to both closures.
pub fn select_filter_indexed<S, U, F, P>(
    source: &S,
    mut selector: F,
    mut predicate: P,
) -> S::Output<U>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, usize) -> U,
    P: FnMut(&U, usize) -> bool,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    for (i, item) in slice.iter().enumerate() {
        let mapped = selector(item, i);
        if predicate(&mapped, i) {
            result.push(mapped);
        }
    }
    FromExact::from_exact(result)
}

// ============================================================================
// Filter + Aggregate
// ============================================================================

/// Fold the elements of `source` satisfying `predicate`, seeding with the first match.
///
/// Returns `T::default()` when nothing matches.
pub fn filter_aggregate<S, P, F>(source: &S, mut predicate: P, func: F) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(S::Item, &S::Item) -> S::Item,
{
    filter_aggregate_indexed(source, |item, _| predicate(item), func)
}

/// As [`filter_aggregate`], with the source index passed to `predicate`.
pub fn filter_aggregate_indexed<S, P, F>(source: &S, mut predicate: P, mut func: F) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item, usize) -> bool,
    F: FnMut(S::Item, &S::Item) -> S::Item,
{
    let mut acc: Option<S::Item> = None;
    for (i, item) in source.as_slice().iter().enumerate() {
        if !predicate(item, i) {
            continue;
        }
        acc = Some(match acc {
            Some(current) => func(current, item),
            None => item.clone(),
        });
    }
    acc.unwrap_or_default()
}

/// Fold every element of `source` satisfying `predicate` into `seed`.
pub fn filter_aggregate_seeded<S, A, P, F>(source: &S, seed: A, mut predicate: P, mut func: F) -> A
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(A, &S::Item) -> A,
{
    let mut acc = seed;
    for item in source.as_slice() {
        if predicate(item) {
            acc = func(acc, item);
        }
    }
    acc
}

/// As [`filter_aggregate_seeded`], then transform the final accumulator with
/// `result_selector`.
#[inline]
pub fn filter_aggregate_seeded_with<S, A, R, P, F, G>(
    source: &S,
    seed: A,
    predicate: P,
    func: F,
    result_selector: G,
) -> R
where
    S: Sequence + ?Sized,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(A, &S::Item) -> A,
    G: FnOnce(A) -> R,
{
    result_selector(filter_aggregate_seeded(source, seed, predicate, func))
}

// ============================================================================
// Filter + Sum
// ============================================================================

/// The sum of the elements of `source` satisfying `predicate`.
///
/// # Errors
///
/// * `Overflow` if a checked width overflows.
pub fn filter_sum<S, P>(source: &S, mut predicate: P) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Summable,
    P: FnMut(&S::Item) -> bool,
{
    let mut total = <S::Item as Summable>::sum_seed();
    for &v in source.as_slice() {
        if predicate(&v) {
            total = <S::Item as Summable>::accumulate(total, v)?;
        }
    }
    Ok(<S::Item as Summable>::settle(total))
}

/// The sum of `selector` over the elements of `source` satisfying `predicate`.
///
/// `selector` runs only for matching elements.
///
/// # Errors
///
/// * `Overflow` if a checked width overflows.
pub fn filter_sum_of<S, U, P, F>(
    source: &S,
    mut predicate: P,
    mut selector: F,
) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    U: Summable,
    P: FnMut(&S::Item) -> bool,
    F: FnMut(&S::Item) -> U,
{
    let mut total = U::sum_seed();
    for item in source.as_slice() {
        if predicate(item) {
            total = U::accumulate(total, selector(item))?;
        }
    }
    Ok(U::settle(total))
}
