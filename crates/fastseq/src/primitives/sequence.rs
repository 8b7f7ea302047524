//! Sequence shapes accepted and produced by the operators.
//!
//! ## Purpose
//!
//! This module abstracts over the linear containers the operators work on:
//! fixed arrays, boxed slices, borrowed slice views and growable vectors.
//! Every operator reads its input through [`Sequence`] and builds its output
//! through [`FromExact`].
//!
//! ## Design notes
//!
//! * **Shape families**: Fixed shapes (`[T; N]`, `[T]`, `Box<[T]>`) produce
//!   `Box<[U]>`; the growable shape (`Vec<T>`) produces `Vec<U>`.
//! * **Exact sizing**: Operators fill a working `Vec` and hand it to
//!   [`FromExact::from_exact`], which trims spare capacity before returning.
//! * **Views**: A `[T]` view over a larger buffer is a sequence in its own
//!   right; operators never look outside the view.
//!
//! ## Key concepts
//!
//! * **Sequence**: Read access plus the output shape for a given element type.
//! * **SequenceMut**: Write access for in-place operators.
//! * **Growable**: Length-changing access for operators that shrink in place.
//!
//! ## Invariants
//!
//! * `len()` is stable for the duration of a single operator call.
//! * Containers returned by `from_exact` have `capacity == len` for `Vec`.
//!
//! ## Non-goals
//!
//! * This module does not implement containers; it adapts the standard ones.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

// ============================================================================
// Output Construction
// ============================================================================

/// A container that can be built from a working buffer, trimmed to exactly
/// the buffer's length.
pub trait FromExact<U>: Sized {
    /// Consume `buffer` and return a container holding exactly its elements.
    fn from_exact(buffer: Vec<U>) -> Self;
}

impl<U> FromExact<U> for Vec<U> {
    #[inline]
    fn from_exact(mut buffer: Vec<U>) -> Self {
        buffer.shrink_to_fit();
        buffer
    }
}

impl<U> FromExact<U> for Box<[U]> {
    #[inline]
    fn from_exact(buffer: Vec<U>) -> Self {
        buffer.into_boxed_slice()
    }
}

// ============================================================================
// Sequence Traits
// ============================================================================

/// An ordered, indexable run of elements with a fixed length for the
/// duration of an operator call.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The container an allocating operator returns for this shape.
    type Output<U>: FromExact<U>;

    /// View the elements as a contiguous slice.
    fn as_slice(&self) -> &[Self::Item];

    /// The number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the sequence has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Sequence`] whose elements can be overwritten in place.
pub trait SequenceMut: Sequence {
    /// View the elements as a mutable contiguous slice.
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

/// A [`SequenceMut`] whose length can shrink.
pub trait Growable: SequenceMut {
    /// Shorten the sequence to `len` elements, dropping the rest.
    fn truncate(&mut self, len: usize);
}

// ============================================================================
// Fixed Shapes
// ============================================================================

impl<T> Sequence for [T] {
    type Item = T;
    type Output<U> = Box<[U]>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for [T] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Output<U> = Box<[U]>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> SequenceMut for [T; N] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;
    type Output<U> = Box<[U]>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for Box<[T]> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

// ============================================================================
// Growable Shape
// ============================================================================

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Output<U> = Vec<U>;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> SequenceMut for Vec<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Growable for Vec<T> {
    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }
}
