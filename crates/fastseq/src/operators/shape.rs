//! Shape operators: take/skip, reverse, zip, range and distinct-in-place.
//!
//! ## Purpose
//!
//! This module changes which elements a sequence holds, or in what order,
//! without looking at their values beyond the caller's predicates.
//!
//! ## Design notes
//!
//! * **Counts**: `take`/`skip` clamp `count` into `[0, len]`; an out-of-range
//!   count is never an error.
//! * **Break points**: `take_while`/`skip_while` split at the first element
//!   failing the predicate.
//! * **Zip**: The shorter input bounds the output; the longer is never read
//!   past that bound.
//! * **Range**: Validates `start + count - 1` against the width before
//!   allocating, then steps without overflow.
//!
//! ## Key concepts
//!
//! ### Distinct in place
//! 1. Sort ascending under the ordering comparer (original order is lost).
//! 2. Compact: the read cursor advances every step, the write cursor only
//!    when the current element differs from the last *written* one under
//!    the equality comparer.
//! 3. Truncate to the write cursor.
//!
//! The equality and ordering comparers must agree: elements equal under one
//! must be adjacent under the other. Otherwise the compaction is unspecified.
//!
//! ## Invariants
//!
//! * `take(n) ++ skip(n) == source` for every `n`.
//! * `reverse(reverse(x)) == x`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::comparer;
use crate::primitives::errors::SequenceError;
use crate::primitives::sequence::{FromExact, Growable, Sequence, SequenceMut};

// ============================================================================
// Take / Skip
// ============================================================================

/// The first `count` elements of `source`.
///
/// A negative `count` takes nothing; a `count` past the end takes everything.
pub fn take<S>(source: &S, count: isize) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let slice = source.as_slice();
    let n = Validator::clamp_count(count, slice.len());
    FromExact::from_exact(slice[..n].to_vec())
}

/// Every element of `source` after the first `count`.
///
/// A negative `count` skips nothing; a `count` past the end skips everything.
pub fn skip<S>(source: &S, count: isize) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let slice = source.as_slice();
    let n = Validator::clamp_count(count, slice.len());
    FromExact::from_exact(slice[n..].to_vec())
}

/// The leading elements of `source` that satisfy `predicate`.
pub fn take_while<S, P>(source: &S, mut predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    take_while_indexed(source, |item, _| predicate(item))
}

/// The leading elements of `source` that satisfy `predicate`, which also
/// receives the element's index.
pub fn take_while_indexed<S, P>(source: &S, predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, usize) -> bool,
{
    let slice = source.as_slice();
    let split = break_point(slice, predicate);
    FromExact::from_exact(slice[..split].to_vec())
}

/// Every element of `source` from the first one failing `predicate` onward.
pub fn skip_while<S, P>(source: &S, mut predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    skip_while_indexed(source, |item, _| predicate(item))
}

/// As [`skip_while`], with the element's index passed to `predicate`.
pub fn skip_while_indexed<S, P>(source: &S, predicate: P) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item, usize) -> bool,
{
    let slice = source.as_slice();
    let split = break_point(slice, predicate);
    FromExact::from_exact(slice[split..].to_vec())
}

// Index of the first element failing `predicate`, or `len` if none does.
fn break_point<T, P>(slice: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T, usize) -> bool,
{
    slice
        .iter()
        .enumerate()
        .position(|(i, item)| !predicate(item, i))
        .unwrap_or(slice.len())
}

// ============================================================================
// Reverse
// ============================================================================

/// A new container holding the elements of `source` in reverse order.
pub fn reverse<S>(source: &S) -> S::Output<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let slice = source.as_slice();
    let mut result = Vec::with_capacity(slice.len());
    result.extend(slice.iter().rev().cloned());
    FromExact::from_exact(result)
}

/// Reverse the elements of `source` within its own buffer.
#[inline]
pub fn reverse_in_place<S>(source: &mut S)
where
    S: SequenceMut + ?Sized,
{
    source.as_mut_slice().reverse();
}

// ============================================================================
// Zip
// ============================================================================

/// Combine `first` and `second` position by position with `combiner`.
///
/// The output has the length of the shorter input and the shape of `first`.
pub fn zip<A, B, R, F>(first: &A, second: &B, mut combiner: F) -> A::Output<R>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
    F: FnMut(&A::Item, &B::Item) -> R,
{
    let a = first.as_slice();
    let b = second.as_slice();
    let n = a.len().min(b.len());

    let mut result = Vec::with_capacity(n);
    for (x, y) in a[..n].iter().zip(&b[..n]) {
        result.push(combiner(x, y));
    }
    FromExact::from_exact(result)
}

// ============================================================================
// Range
// ============================================================================

/// `count` consecutive integers starting at `start`, in the container `C`.
///
/// # Errors
///
/// * `ArgumentOutOfRange("count")` if `count` is negative, the last value
///   would not fit in `I`, or `count` elements cannot be allocated. Nothing
///   is filled in those cases.
pub fn range<I, C>(start: I, count: I) -> Result<C, SequenceError>
where
    I: PrimInt,
    C: FromExact<I>,
{
    let n = Validator::validate_range(start, count)?;

    let mut result: Vec<I> = Vec::new();
    result
        .try_reserve_exact(n)
        .map_err(|_| SequenceError::ArgumentOutOfRange("count"))?;
    if n > 0 {
        let mut value = start;
        result.push(value);
        for _ in 1..n {
            value = value + I::one();
            result.push(value);
        }
    }
    Ok(FromExact::from_exact(result))
}

// ============================================================================
// Distinct
// ============================================================================

/// Sort `source` ascending and remove duplicates, shrinking it in place.
///
/// Empty input is left untouched.
#[inline]
pub fn distinct_in_place<G>(source: &mut G)
where
    G: Growable + ?Sized,
    G::Item: Ord,
{
    distinct_in_place_by(
        source,
        comparer::equality::<G::Item>(),
        comparer::natural::<G::Item>(),
    );
}

/// Sort `source` under `compare` and remove elements equal under `equals` to
/// the last kept one, shrinking it in place.
///
/// The sort is stable, so the first of each run of equal elements is kept.
pub fn distinct_in_place_by<G, E, C>(source: &mut G, equals: E, compare: C)
where
    G: Growable + ?Sized,
    E: Fn(&G::Item, &G::Item) -> bool,
    C: Fn(&G::Item, &G::Item) -> Ordering,
{
    let slice = source.as_mut_slice();
    if slice.is_empty() {
        return;
    }

    slice.sort_by(|a, b| compare(a, b));

    let mut write = 1;
    for read in 1..slice.len() {
        if !equals(&slice[read], &slice[write - 1]) {
            slice.swap(write, read);
            write += 1;
        }
    }
    source.truncate(write);
}
