//! Summation and averaging contracts per numeric width.
//!
//! ## Purpose
//!
//! This module defines how each numeric width accumulates a sum and an
//! average, so that `sum`, `average` and `filter_sum` are written once and
//! the width-specific overflow and precision rules live here.
//!
//! ## Design notes
//!
//! * **Integers**: Sums are checked in the native width; an overflow is
//!   reported as [`SequenceError::Overflow`]. Averages accumulate in the
//!   64-bit width of the same signedness (also checked) and divide in `f64`.
//!   Pointer-sized integers widen to that 64-bit width as well.
//! * **f32**: Accumulates in `f64` and narrows once at the end.
//! * **f64**: Accumulates natively without overflow checks.
//! * **Decimal** (feature `decimal`): Accumulates at native precision with
//!   `checked_add`.
//!
//! ## Invariants
//!
//! * `average` is never asked to divide by zero; callers reject empty input first.
//! * For any integer sequence whose sum fits the native width,
//!   `average == sum as f64 / count as f64` exactly.
//!
//! ## Non-goals
//!
//! * This module does not iterate sequences; operators drive the accumulation.

// External dependencies
use num_traits::CheckedAdd;

// Internal dependencies
use crate::primitives::errors::SequenceError;

// ============================================================================
// Traits
// ============================================================================

/// A numeric width that can be summed.
pub trait Summable: Copy {
    /// The running total type.
    type Accumulator: Copy;

    /// The empty total.
    fn sum_seed() -> Self::Accumulator;

    /// Add `value` to `total`.
    fn accumulate(total: Self::Accumulator, value: Self) -> Result<Self::Accumulator, SequenceError>;

    /// Convert the final total back to the element width.
    fn settle(total: Self::Accumulator) -> Self;
}

/// A numeric width that can be averaged.
pub trait Averageable: Copy {
    /// The running total type.
    type Accumulator: Copy;

    /// The type of the mean.
    type Output;

    /// The empty total.
    fn average_seed() -> Self::Accumulator;

    /// Add `value` to `total`.
    fn accumulate_average(
        total: Self::Accumulator,
        value: Self,
    ) -> Result<Self::Accumulator, SequenceError>;

    /// Divide `total` by a non-zero `count`.
    fn divide(total: Self::Accumulator, count: usize) -> Self::Output;
}

// ============================================================================
// Integer Widths
// ============================================================================

macro_rules! impl_integer_summation {
    ($($t:ty => $wide:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                type Accumulator = $t;

                #[inline]
                fn sum_seed() -> $t {
                    0
                }

                #[inline]
                fn accumulate(total: $t, value: $t) -> Result<$t, SequenceError> {
                    CheckedAdd::checked_add(&total, &value).ok_or(SequenceError::Overflow)
                }

                #[inline]
                fn settle(total: $t) -> $t {
                    total
                }
            }

            impl Averageable for $t {
                type Accumulator = $wide;
                type Output = f64;

                #[inline]
                fn average_seed() -> $wide {
                    0
                }

                #[inline]
                fn accumulate_average(total: $wide, value: $t) -> Result<$wide, SequenceError> {
                    CheckedAdd::checked_add(&total, &(value as $wide))
                        .ok_or(SequenceError::Overflow)
                }

                #[inline]
                fn divide(total: $wide, count: usize) -> f64 {
                    total as f64 / count as f64
                }
            }
        )*
    };
}

impl_integer_summation! {
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i64,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u64,
    isize => i64,
    usize => u64,
}

// ============================================================================
// Floating-Point Widths
// ============================================================================

impl Summable for f32 {
    type Accumulator = f64;

    #[inline]
    fn sum_seed() -> f64 {
        0.0
    }

    #[inline]
    fn accumulate(total: f64, value: f32) -> Result<f64, SequenceError> {
        Ok(total + f64::from(value))
    }

    #[inline]
    fn settle(total: f64) -> f32 {
        total as f32
    }
}

impl Averageable for f32 {
    type Accumulator = f64;
    type Output = f32;

    #[inline]
    fn average_seed() -> f64 {
        0.0
    }

    #[inline]
    fn accumulate_average(total: f64, value: f32) -> Result<f64, SequenceError> {
        Ok(total + f64::from(value))
    }

    #[inline]
    fn divide(total: f64, count: usize) -> f32 {
        (total / count as f64) as f32
    }
}

impl Summable for f64 {
    type Accumulator = f64;

    #[inline]
    fn sum_seed() -> f64 {
        0.0
    }

    #[inline]
    fn accumulate(total: f64, value: f64) -> Result<f64, SequenceError> {
        Ok(total + value)
    }

    #[inline]
    fn settle(total: f64) -> f64 {
        total
    }
}

impl Averageable for f64 {
    type Accumulator = f64;
    type Output = f64;

    #[inline]
    fn average_seed() -> f64 {
        0.0
    }

    #[inline]
    fn accumulate_average(total: f64, value: f64) -> Result<f64, SequenceError> {
        Ok(total + value)
    }

    #[inline]
    fn divide(total: f64, count: usize) -> f64 {
        total / count as f64
    }
}

// ============================================================================
// Decimal Width
// ============================================================================

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::Decimal;

    use super::{Averageable, SequenceError, Summable};

    impl Summable for Decimal {
        type Accumulator = Decimal;

        #[inline]
        fn sum_seed() -> Decimal {
            Decimal::ZERO
        }

        #[inline]
        fn accumulate(total: Decimal, value: Decimal) -> Result<Decimal, SequenceError> {
            total.checked_add(value).ok_or(SequenceError::Overflow)
        }

        #[inline]
        fn settle(total: Decimal) -> Decimal {
            total
        }
    }

    impl Averageable for Decimal {
        type Accumulator = Decimal;
        type Output = Decimal;

        #[inline]
        fn average_seed() -> Decimal {
            Decimal::ZERO
        }

        #[inline]
        fn accumulate_average(total: Decimal, value: Decimal) -> Result<Decimal, SequenceError> {
            total.checked_add(value).ok_or(SequenceError::Overflow)
        }

        #[inline]
        fn divide(total: Decimal, count: usize) -> Decimal {
            total / Decimal::from(count as u64)
        }
    }
}
