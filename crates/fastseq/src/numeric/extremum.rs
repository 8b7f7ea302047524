//! Minimum and maximum scans per numeric width.
//!
//! ## Purpose
//!
//! This module defines how each numeric width finds its smallest and largest
//! value, isolating the cases where the widths genuinely differ: integer and
//! decimal widths scan against their representable bounds, floating-point
//! widths follow the NaN propagation rules below.
//!
//! ## Key concepts
//!
//! ### Floating-point NaN handling
//! * **Minimum**: Seeds with the first element. Any NaN met during the scan is
//!   returned at once, so NaN dominates a minimum wherever it appears.
//! * **Maximum**: Skips leading NaNs to find its seed (falling back to the
//!   first element when every value is NaN), then compares with `>`. A NaN
//!   met after the seed never wins.
//!
//! ### Bounded widths
//! * **Minimum** starts from the width's maximum value, **maximum** from its
//!   minimum value, and every element is compared unconditionally.
//!
//! ## Invariants
//!
//! * Both scans return `None` exactly when the input is empty.
//! * A minimum scan stops pulling values after returning a NaN.

// External dependencies
use num_traits::Bounded;

// ============================================================================
// Trait
// ============================================================================

/// A numeric width with a defined minimum / maximum scan.
pub trait Extremum: Copy + PartialOrd {
    /// The smallest of `values`, or `None` if there are none.
    fn min_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self>;

    /// The largest of `values`, or `None` if there are none.
    fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self>;
}

// ============================================================================
// Bounded Widths
// ============================================================================

macro_rules! impl_bounded_extremum {
    ($($t:ty),* $(,)?) => {
        $(
            impl Extremum for $t {
                #[inline]
                fn min_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
                    bounded_scan(values, <$t as Bounded>::max_value(), |v, r| v < r)
                }

                #[inline]
                fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
                    bounded_scan(values, <$t as Bounded>::min_value(), |v, r| v > r)
                }
            }
        )*
    };
}

impl_bounded_extremum!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Scan from a sentinel seed, replacing it whenever `wins` holds.
#[inline]
fn bounded_scan<T, I, W>(values: I, seed: T, wins: W) -> Option<T>
where
    T: Copy,
    I: IntoIterator<Item = T>,
    W: Fn(T, T) -> bool,
{
    let mut seen = false;
    let mut r = seed;
    for v in values {
        seen = true;
        if wins(v, r) {
            r = v;
        }
    }
    seen.then_some(r)
}

// ============================================================================
// Floating-Point Widths
// ============================================================================

macro_rules! impl_float_extremum {
    ($($t:ty),* $(,)?) => {
        $(
            impl Extremum for $t {
                fn min_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
                    let mut iter = values.into_iter();
                    let mut r = iter.next()?;
                    if r.is_nan() {
                        return Some(r);
                    }
                    for v in iter {
                        if v < r {
                            r = v;
                        } else if v.is_nan() {
                            return Some(v);
                        }
                    }
                    Some(r)
                }

                fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
                    let mut iter = values.into_iter();
                    let first = iter.next()?;
                    let mut r = first;

                    // Seed search: first non-NaN value
                    if r.is_nan() {
                        match iter.by_ref().find(|v| !v.is_nan()) {
                            Some(v) => r = v,
                            None => return Some(first),
                        }
                    }

                    for v in iter {
                        if v > r {
                            r = v;
                        }
                    }
                    Some(r)
                }
            }
        )*
    };
}

impl_float_extremum!(f32, f64);

// ============================================================================
// Decimal Width
// ============================================================================

#[cfg(feature = "decimal")]
impl Extremum for rust_decimal::Decimal {
    #[inline]
    fn min_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
        bounded_scan(values, rust_decimal::Decimal::MAX, |v, r| v < r)
    }

    #[inline]
    fn max_of<I: IntoIterator<Item = Self>>(values: I) -> Option<Self> {
        bounded_scan(values, rust_decimal::Decimal::MIN, |v, r| v > r)
    }
}
