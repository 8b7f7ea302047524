//! Error types for sequence operators.
//!
//! ## Purpose
//!
//! This module defines the failure vocabulary shared by every operator:
//! invalid arguments, empty sequences, missing or duplicated matches,
//! unsupported shape combinations and numeric overflow.
//!
//! ## Design notes
//!
//! * **Raised, not sentinel**: Operators return `Err` at the point of detection.
//!   Only the `*_or_default` variants turn absence into a value.
//! * **No-std**: Variants carry `&'static str` names only, so no allocation is
//!   needed to build an error.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Argument errors**: `ArgumentNull`, `ArgumentOutOfRange`.
//! 2. **Cardinality errors**: `NoElements`, `NoMatch`, `MoreThanOneElement`, `MoreThanOneMatch`.
//! 3. **Shape errors**: `NotSupported` (e.g. pointwise comparison of unequal lengths).
//! 4. **Numeric errors**: `Overflow` during checked integer or decimal summation.
//!
//! ## Invariants
//!
//! * Argument errors are always reported before any element is visited.
//! * `Overflow` is the only error that can surface mid-scan.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceError {
    /// A required argument was absent.
    ///
    /// Borrowed sequences and closures cannot be null in safe Rust, so the
    /// operators in this crate never produce this variant themselves. It is
    /// kept so callers bridging nullable inputs can report through the same
    /// type.
    ArgumentNull(&'static str),

    /// A numeric argument lies outside its valid range (e.g. a negative count).
    ArgumentOutOfRange(&'static str),

    /// The sequence is empty and the operation has no defined result.
    NoElements,

    /// No element satisfied a predicate where a match was mandatory.
    NoMatch,

    /// The sequence holds more than one element where exactly one was required.
    MoreThanOneElement,

    /// More than one element satisfied a predicate where exactly one was required.
    MoreThanOneMatch,

    /// The operation is not valid for the given sequence shapes.
    NotSupported,

    /// Checked arithmetic overflowed while accumulating.
    Overflow,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ArgumentNull(name) => write!(f, "Value cannot be null: {name}"),
            Self::ArgumentOutOfRange(name) => {
                write!(f, "Specified argument was out of the range of valid values: {name}")
            }
            Self::NoElements => write!(f, "Sequence contains no elements"),
            Self::NoMatch => write!(f, "Sequence contains no matching element"),
            Self::MoreThanOneElement => write!(f, "Sequence contains more than one element"),
            Self::MoreThanOneMatch => {
                write!(f, "Sequence contains more than one matching element")
            }
            Self::NotSupported => write!(f, "Specified method is not supported"),
            Self::Overflow => write!(f, "Arithmetic operation resulted in an overflow"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SequenceError {}
