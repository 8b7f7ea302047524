//! Element selection: first, last and single, with `OrDefault` variants.
//!
//! ## Purpose
//!
//! This module picks one element out of a sequence, either by position or by
//! the predicate it satisfies, and reports the cardinality violations the
//! caller asked to be told about.
//!
//! ## Design notes
//!
//! * **Direction**: `first*` scans from the front, `last*` from the back.
//! * **Single**: Without a predicate this is a length check, not a scan. With
//!   a predicate the scan continues past the first match to detect a second.
//! * **OrDefault**: Absence returns `T::default()`. Duplicate matches still
//!   fail, since they are a caller error rather than absence.
//!
//! ## Invariants
//!
//! * The predicate is called at most once per element.
//! * `single_where` visits every element unless a second match is found.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SequenceError;
use crate::primitives::sequence::Sequence;

// ============================================================================
// First
// ============================================================================

/// The first element of `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn first<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    source
        .as_slice()
        .first()
        .cloned()
        .ok_or(SequenceError::NoElements)
}

/// The first element of `source` satisfying `predicate`.
///
/// # Errors
///
/// * `NoMatch` if no element satisfies `predicate`.
pub fn first_where<S, P>(source: &S, mut predicate: P) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    source
        .as_slice()
        .iter()
        .find(|item| predicate(item))
        .cloned()
        .ok_or(SequenceError::NoMatch)
}

/// The first element of `source`, or `T::default()` if it is empty.
pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    source.as_slice().first().cloned().unwrap_or_default()
}

/// The first element of `source` satisfying `predicate`, or `T::default()`.
pub fn first_or_default_where<S, P>(source: &S, mut predicate: P) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    source
        .as_slice()
        .iter()
        .find(|item| predicate(item))
        .cloned()
        .unwrap_or_default()
}

// ============================================================================
// Last
// ============================================================================

/// The last element of `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
pub fn last<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    source
        .as_slice()
        .last()
        .cloned()
        .ok_or(SequenceError::NoElements)
}

/// The last element of `source` satisfying `predicate`, scanning from the back.
///
/// # Errors
///
/// * `NoMatch` if no element satisfies `predicate`.
pub fn last_where<S, P>(source: &S, mut predicate: P) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    source
        .as_slice()
        .iter()
        .rev()
        .find(|item| predicate(item))
        .cloned()
        .ok_or(SequenceError::NoMatch)
}

/// The last element of `source`, or `T::default()` if it is empty.
pub fn last_or_default<S>(source: &S) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    source.as_slice().last().cloned().unwrap_or_default()
}

/// The last element of `source` satisfying `predicate`, or `T::default()`.
pub fn last_or_default_where<S, P>(source: &S, mut predicate: P) -> S::Item
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    source
        .as_slice()
        .iter()
        .rev()
        .find(|item| predicate(item))
        .cloned()
        .unwrap_or_default()
}

// ============================================================================
// Single
// ============================================================================

/// The only element of `source`.
///
/// # Errors
///
/// * `NoElements` if `source` is empty.
/// * `MoreThanOneElement` if `source` has two or more elements.
pub fn single<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let slice = source.as_slice();
    Validator::require_single(slice.len())?;
    Ok(slice[0].clone())
}

/// The only element of `source`, or `T::default()` if it is empty.
///
/// # Errors
///
/// * `MoreThanOneElement` if `source` has two or more elements.
pub fn single_or_default<S>(source: &S) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
{
    let slice = source.as_slice();
    Validator::require_at_most_one(slice.len())?;
    Ok(slice.first().cloned().unwrap_or_default())
}

/// The only element of `source` satisfying `predicate`.
///
/// # Errors
///
/// * `MoreThanOneMatch` as soon as a second match is found.
/// * `NoMatch` if no element satisfies `predicate`.
pub fn single_where<S, P>(source: &S, predicate: P) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    find_single(source.as_slice(), predicate)?
        .cloned()
        .ok_or(SequenceError::NoMatch)
}

/// The only element of `source` satisfying `predicate`, or `T::default()`.
///
/// # Errors
///
/// * `MoreThanOneMatch` as soon as a second match is found.
pub fn single_or_default_where<S, P>(source: &S, predicate: P) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    S::Item: Clone + Default,
    P: FnMut(&S::Item) -> bool,
{
    Ok(find_single(source.as_slice(), predicate)?
        .cloned()
        .unwrap_or_default())
}

// Full scan for the unique match; a second match fails immediately.
fn find_single<T, P>(slice: &[T], mut predicate: P) -> Result<Option<&T>, SequenceError>
where
    P: FnMut(&T) -> bool,
{
    let mut found = None;
    for item in slice {
        if predicate(item) {
            if found.is_some() {
                return Err(SequenceError::MoreThanOneMatch);
            }
            found = Some(item);
        }
    }
    Ok(found)
}
