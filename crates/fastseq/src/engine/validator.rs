//! Argument validation for sequence operators.
//!
//! ## Purpose
//!
//! This module provides the checks operators run before scanning: element
//! count requirements, length agreement between paired sequences, count
//! clamping and range bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Every check runs before the first element is visited.
//! * **Ordered**: Operators call these checks in a fixed order (argument
//!   checks, then length checks), which decides the error a multiply-invalid
//!   call reports.
//! * **Generics**: Range validation is generic over `PrimInt` widths.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A successful `validate_range` guarantees `start + (count - 1)` is
//!   representable in the integer width.
//!
//! ## Non-goals
//!
//! * This module does not scan elements or call user closures.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SequenceError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operator arguments.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Cardinality Checks
    // ========================================================================

    /// Require at least one element.
    #[inline]
    pub fn require_elements(len: usize) -> Result<(), SequenceError> {
        if len == 0 {
            return Err(SequenceError::NoElements);
        }
        Ok(())
    }

    /// Require exactly one element.
    #[inline]
    pub fn require_single(len: usize) -> Result<(), SequenceError> {
        match len {
            0 => Err(SequenceError::NoElements),
            1 => Ok(()),
            _ => Err(SequenceError::MoreThanOneElement),
        }
    }

    /// Require at most one element (the single-or-default contract).
    #[inline]
    pub fn require_at_most_one(len: usize) -> Result<(), SequenceError> {
        if len > 1 {
            return Err(SequenceError::MoreThanOneElement);
        }
        Ok(())
    }

    /// Require two paired sequences to have equal lengths.
    #[inline]
    pub fn require_same_length(first: usize, second: usize) -> Result<(), SequenceError> {
        if first != second {
            return Err(SequenceError::NotSupported);
        }
        Ok(())
    }

    // ========================================================================
    // Count Arguments
    // ========================================================================

    /// Clamp a possibly negative `count` into `[0, len]`.
    #[inline]
    pub fn clamp_count(count: isize, len: usize) -> usize {
        if count <= 0 {
            0
        } else {
            (count as usize).min(len)
        }
    }

    /// Validate a `(start, count)` range and return the count as `usize`.
    ///
    /// # Errors
    ///
    /// * `ArgumentOutOfRange("count")` if `count` is negative, or if the last
    ///   value `start + count - 1` is not representable in `I`.
    pub fn validate_range<I: PrimInt>(start: I, count: I) -> Result<usize, SequenceError> {
        if count < I::zero() {
            return Err(SequenceError::ArgumentOutOfRange("count"));
        }

        if count > I::zero() && start.checked_add(&(count - I::one())).is_none() {
            return Err(SequenceError::ArgumentOutOfRange("count"));
        }

        count
            .to_usize()
            .ok_or(SequenceError::ArgumentOutOfRange("count"))
    }
}
