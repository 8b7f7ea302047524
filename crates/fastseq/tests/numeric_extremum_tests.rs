#![cfg(feature = "dev")]
//! Tests for per-width minimum and maximum scans.
//!
//! ## Test Organization
//!
//! 1. **Bounded Widths** - Integer scans and their sentinel seeds
//! 2. **Floating-Point Minimum** - NaN dominance, infinities
//! 3. **Floating-Point Maximum** - Leading NaN skip, trailing NaN ignored

use fastseq::internals::numeric::extremum::Extremum;

// ============================================================================
// Bounded Width Tests
// ============================================================================

/// Test integer minimum and maximum.
#[test]
fn test_integer_extremes() {
    assert_eq!(<i32 as Extremum>::min_of([3, -1, 2]), Some(-1));
    assert_eq!(<i32 as Extremum>::max_of([3, -1, 2]), Some(3));
    assert_eq!(<u8 as Extremum>::min_of([7u8, 9, 8]), Some(7));
}

/// Test that values equal to the sentinel seed are still found.
///
/// Verifies that a sequence of the width's extreme values is not mistaken for empty.
#[test]
fn test_integer_extremes_at_bounds() {
    assert_eq!(<i32 as Extremum>::min_of([i32::MAX]), Some(i32::MAX));
    assert_eq!(<i64 as Extremum>::max_of([i64::MIN, i64::MIN]), Some(i64::MIN));
    assert_eq!(<usize as Extremum>::max_of([0usize]), Some(0));
}

/// Test empty input.
#[test]
fn test_extremes_empty() {
    assert_eq!(<i32 as Extremum>::min_of(Vec::new()), None);
    assert_eq!(<i32 as Extremum>::max_of(Vec::new()), None);
    assert_eq!(<f64 as Extremum>::min_of(Vec::new()), None);
    assert_eq!(<f64 as Extremum>::max_of(Vec::new()), None);
}

// ============================================================================
// Floating-Point Minimum Tests
// ============================================================================

/// Test that NaN dominates a minimum wherever it appears.
#[test]
fn test_float_min_nan_dominates() {
    assert!(<f64 as Extremum>::min_of([f64::NAN, 1.0, 0.5]).unwrap().is_nan());
    assert!(<f64 as Extremum>::min_of([1.0, f64::NAN, 0.5]).unwrap().is_nan());
    assert!(<f32 as Extremum>::min_of([1.0_f32, 0.5, f32::NAN]).unwrap().is_nan());
}

/// Test that the minimum scan stops at the first NaN.
#[test]
fn test_float_min_stops_at_nan() {
    let mut pulled = 0;
    let values = [2.0, f64::NAN, 1.0, 0.0].into_iter().inspect(|_| pulled += 1);
    assert!(<f64 as Extremum>::min_of(values).unwrap().is_nan());
    assert_eq!(pulled, 2);
}

/// Test minimum over infinities.
///
/// Verifies that a sequence of positive infinities has infinite minimum.
#[test]
fn test_float_min_infinities() {
    assert_eq!(
        <f64 as Extremum>::min_of([f64::INFINITY, f64::INFINITY]),
        Some(f64::INFINITY)
    );
    assert_eq!(
        <f64 as Extremum>::min_of([1.0, f64::NEG_INFINITY]),
        Some(f64::NEG_INFINITY)
    );
}

// ============================================================================
// Floating-Point Maximum Tests
// ============================================================================

/// Test that leading NaNs are skipped when seeding the maximum.
#[test]
fn test_float_max_skips_leading_nan() {
    assert_eq!(
        <f64 as Extremum>::max_of([f64::NAN, f64::NAN, 1.0, 3.0, 2.0]),
        Some(3.0)
    );
}

/// Test that a NaN after the seed never wins.
#[test]
fn test_float_max_ignores_later_nan() {
    assert_eq!(<f64 as Extremum>::max_of([1.0, f64::NAN, 0.5]), Some(1.0));
    assert_eq!(<f32 as Extremum>::max_of([1.0_f32, f32::NAN]), Some(1.0));
}

/// Test maximum over all-NaN input.
#[test]
fn test_float_max_all_nan() {
    assert!(<f64 as Extremum>::max_of([f64::NAN, f64::NAN]).unwrap().is_nan());
}

/// Test maximum over negative infinities.
#[test]
fn test_float_max_infinities() {
    assert_eq!(
        <f64 as Extremum>::max_of([f64::NEG_INFINITY]),
        Some(f64::NEG_INFINITY)
    );
}

// ============================================================================
// Decimal Tests
// ============================================================================

/// Test decimal extremes.
#[cfg(feature = "decimal")]
#[test]
fn test_decimal_extremes() {
    use rust_decimal::Decimal;

    let values = [Decimal::new(15, 1), Decimal::new(-2, 0), Decimal::MAX];
    assert_eq!(<Decimal as Extremum>::min_of(values), Some(Decimal::new(-2, 0)));
    assert_eq!(<Decimal as Extremum>::max_of(values), Some(Decimal::MAX));
}
