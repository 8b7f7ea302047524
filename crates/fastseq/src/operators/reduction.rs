//! Reductions: minimum/maximum, sum/average and aggregate.
//!
//! ## Purpose
//!
//! This module folds a whole sequence into one value. Numeric reductions are
//! written once against the [`Extremum`], [`Summable`] and [`Averageable`]
//! bundles; generic reductions take an ordering or a fold function.
//!
//! ## Design notes
//!
//! * **Two numeric paths**: raw elements (`min`, `sum`, ...) and selector
//!   results (`min_of`, `sum_of`, ...). Selectors run once per element.
//! * **Generic extremes**: `min_by`/`max_by` keep an explicit `Option` for
//!   "no candidate yet" instead of a sentinel value. `min_present` and
//!   `max_present` skip absent (`None`) elements entirely.
//! * **Ties**: The first of several equal extremes wins.
//!
//! ## Key concepts
//!
//! ### Aggregate shapes
//! 1. **No seed**: the first element seeds the fold, which resumes at index 1.
//! 2. **Seeded**: the fold starts from the caller's seed and covers every element.
//! 3. **Seeded with result selector**: as 2, then the final accumulator is transformed.
//!
//! ## Invariants
//!
//! * Empty input is rejected with `NoElements` before any selector runs,
//!   except `sum`/`sum_of` (empty sum is zero) and seeded aggregates.
//! * `Overflow` aborts the scan at the element that overflowed.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::numeric::extremum::Extremum;
use crate::numeric::summation::{Averageable, Summable};
use crate::primitives::comparer;
use crate::primitives::errors::SequenceError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// Minimum
// ============================================================================

/// The smallest element of a numeric `source`.
///
/// Floating-point widths return NaN as soon as one is encountered.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn min<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Extremum,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    <S::Item as Extremum>::min_of(slice.iter().copied()).ok_or(SequenceError::NoElements)
}

/// The smallest value `selector` produces over `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn min_of<S, U, F>(source: &S, selector: F) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    U: Extremum,
    F: FnMut(&S::Item) -> U,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    U::min_of(slice.iter().map(selector)).ok_or(SequenceError::NoElements)
}

/// The smallest element of `source` under the natural ordering.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
#[inline]
pub fn min_ord<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    min_by(source, comparer::natural::<S::Item>())
}

/// The smallest element of `source` under `compare`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn min_by<S, C>(source: &S, compare: C) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    extreme_by(slice.iter(), |v, r| compare(*v, *r) == Ordering::Less)
        .cloned()
        .ok_or(SequenceError::NoElements)
}

/// The smallest value `selector` produces over `source`, under `compare`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn min_of_by<S, U, F, C>(source: &S, selector: F, compare: C) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
    C: Fn(&U, &U) -> Ordering,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    extreme_by(slice.iter().map(selector), |v, r| {
        compare(v, r) == Ordering::Less
    })
    .ok_or(SequenceError::NoElements)
}

/// The smallest present value of a `source` of optional elements.
///
/// Absent elements are skipped. Returns `Ok(None)` when every element is absent.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn min_present<S, T>(source: &S) -> Result<Option<T>, SequenceError>
where
    S: Sequence<Item = Option<T>> + ?Sized,
    T: Ord + Clone,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    Ok(extreme_by(slice.iter().flatten(), |v, r| v < r).cloned())
}

// ============================================================================
// Maximum
// ============================================================================

/// The largest element of a numeric `source`.
///
/// Floating-point widths skip leading NaNs when choosing the seed; a NaN
/// after the seed never wins.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn max<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Extremum,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    <S::Item as Extremum>::max_of(slice.iter().copied()).ok_or(SequenceError::NoElements)
}

/// The largest value `selector` produces over `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn max_of<S, U, F>(source: &S, selector: F) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    U: Extremum,
    F: FnMut(&S::Item) -> U,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    U::max_of(slice.iter().map(selector)).ok_or(SequenceError::NoElements)
}

/// The largest element of `source` under the natural ordering.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
#[inline]
pub fn max_ord<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    max_by(source, comparer::natural::<S::Item>())
}

/// The largest element of `source` under `compare`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn max_by<S, C>(source: &S, compare: C) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    C: Fn(&S::Item, &S::Item) -> Ordering,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    extreme_by(slice.iter(), |v, r| compare(*v, *r) == Ordering::Greater)
        .cloned()
        .ok_or(SequenceError::NoElements)
}

/// The largest value `selector` produces over `source`, under `compare`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn max_of_by<S, U, F, C>(source: &S, selector: F, compare: C) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> U,
    C: Fn(&U, &U) -> Ordering,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    extreme_by(slice.iter().map(selector), |v, r| {
        compare(v, r) == Ordering::Greater
    })
    .ok_or(SequenceError::NoElements)
}

/// The largest present value of a `source` of optional elements.
///
/// Absent elements are skipped. Returns `Ok(None)` when every element is absent.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn max_present<S, T>(source: &S) -> Result<Option<T>, SequenceError>
where
    S: Sequence<Item = Option<T>> + ?Sized,
    T: Ord + Clone,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;
    Ok(extreme_by(slice.iter().flatten(), |v, r| v > r).cloned())
}

// Keep the running candidate, replacing it only when `wins(candidate, current)`.
#[inline]
fn extreme_by<I, W>(values: I, wins: W) -> Option<I::Item>
where
    I: Iterator,
    W: Fn(&I::Item, &I::Item) -> bool,
{
    let mut best: Option<I::Item> = None;
    for v in values {
        let replace = match &best {
            Some(r) => wins(&v, r),
            None => true,
        };
        if replace {
            best = Some(v);
        }
    }
    best
}

// ============================================================================
// Sum
// ============================================================================

/// The sum of a numeric `source`.
///
/// An empty sequence sums to zero.
///
/// # Errors
///
/// * `Overflow` if a checked width overflows.
pub fn sum<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Summable,
{
    let mut total = <S::Item as Summable>::sum_seed();
    for &v in source.as_slice() {
        total = <S::Item as Summable>::accumulate(total, v)?;
    }
    Ok(<S::Item as Summable>::settle(total))
}

/// The sum of the values `selector` produces over `source`.
///
/// # Errors
///
/// * `Overflow` if a checked width overflows.
pub fn sum_of<S, U, F>(source: &S, mut selector: F) -> Result<U, SequenceError>
where
    S: Sequence + ?Sized,
    U: Summable,
    F: FnMut(&S::Item) -> U,
{
    let mut total = U::sum_seed();
    for item in source.as_slice() {
        total = U::accumulate(total, selector(item))?;
    }
    Ok(U::settle(total))
}

// ============================================================================
// Average
// ============================================================================

/// The arithmetic mean of a numeric `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty (checked before summation).
/// * `Overflow` if the running total overflows.
pub fn average<S>(source: &S) -> Result<<S::Item as Averageable>::Output, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Averageable,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;

    let mut total = <S::Item as Averageable>::average_seed();
    for &v in slice {
        total = <S::Item as Averageable>::accumulate_average(total, v)?;
    }
    Ok(<S::Item as Averageable>::divide(total, slice.len()))
}

/// The arithmetic mean of the values `selector` produces over `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty (checked before `selector` runs).
/// * `Overflow` if the running total overflows.
pub fn average_of<S, U, F>(source: &S, mut selector: F) -> Result<U::Output, SequenceError>
where
    S: Sequence + ?Sized,
    U: Averageable,
    F: FnMut(&S::Item) -> U,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;

    let mut total = U::average_seed();
    for item in slice {
        total = U::accumulate_average(total, selector(item))?;
    }
    Ok(U::divide(total, slice.len()))
}

// ============================================================================
// Aggregate
// ============================================================================

/// Fold `source` with `func`, seeding with its first element.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn aggregate<S, F>(source: &S, mut func: F) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(S::Item, &S::Item) -> S::Item,
{
    let slice = source.as_slice();
    Validator::require_elements(slice.len())?;

    let mut acc = slice[0].clone();
    for item in &slice[1..] {
        acc = func(acc, item);
    }
    Ok(acc)
}

/// Fold every element of `source` into `seed` with `func`.
pub fn aggregate_seeded<S, A, F>(source: &S, seed: A, mut func: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
{
    let mut acc = seed;
    for item in source.as_slice() {
        acc = func(acc, item);
    }
    acc
}

/// Fold every element of `source` into `seed` with `func`, then transform the
/// final accumulator with `result_selector`.
#[inline]
pub fn aggregate_seeded_with<S, A, R, F, G>(source: &S, seed: A, func: F, result_selector: G) -> R
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
    G: FnOnce(A) -> R,
{
    result_selector(aggregate_seeded(source, seed, func))
}
