//! Ordering and equality functions for sort-dependent operators.
//!
//! ## Purpose
//!
//! This module provides the comparison capabilities operators accept: the
//! element type's natural ordering and equality, a total-order fallback for
//! partially ordered types, and adapters that reverse an ordering or derive
//! one from a key.
//!
//! ## Design notes
//!
//! * **Closures, not objects**: A comparer is any `Fn(&T, &T) -> Ordering`
//!   and an equality comparer any `Fn(&T, &T) -> bool`. Adapters compose
//!   closures and return `impl Fn`.
//! * **Resolved once**: Operators without a `_by` suffix call one of the
//!   default constructors here at entry, never per comparison.
//!
//! ## Key concepts
//!
//! * **natural / equality**: `Ord::cmp` and `PartialEq::eq`.
//! * **partial**: `PartialOrd` with incomparable pairs (NaN) treated as equal.
//! * **reverse**: swaps the operands of a base ordering.
//! * **by_key / by_key_descending**: orders by a projected key.
//!
//! ## Invariants
//!
//! * Supplied orderings must be total orders. A violation yields an
//!   unspecified order, never a panic.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Default Capabilities
// ============================================================================

/// The natural ordering of `T`.
#[inline]
pub fn natural<T: Ord + ?Sized>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.cmp(b)
}

/// The ordering of a partially ordered `T`, treating incomparable pairs as equal.
#[inline]
pub fn partial<T: PartialOrd + ?Sized>() -> impl Fn(&T, &T) -> Ordering + Copy {
    |a: &T, b: &T| a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// The default equality of `T`.
#[inline]
pub fn equality<T: PartialEq + ?Sized>() -> impl Fn(&T, &T) -> bool + Copy {
    |a: &T, b: &T| a == b
}

// ============================================================================
// Adapters
// ============================================================================

/// Reverse `comparer`, for descending orders.
#[inline]
pub fn reverse<T: ?Sized, C>(comparer: C) -> impl Fn(&T, &T) -> Ordering
where
    C: Fn(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| comparer(b, a)
}

/// Order elements by the key `selector` derives, using `comparer` on keys.
#[inline]
pub fn by_key<T: ?Sized, K, F, C>(selector: F, comparer: C) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    move |a: &T, b: &T| comparer(&selector(a), &selector(b))
}

/// Order elements by the key `selector` derives, descending.
#[inline]
pub fn by_key_descending<T: ?Sized, K, F, C>(
    selector: F,
    comparer: C,
) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    move |a: &T, b: &T| comparer(&selector(b), &selector(a))
}
