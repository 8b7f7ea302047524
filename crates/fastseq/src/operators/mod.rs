//! Layer 4: Operators
//!
//! # Purpose
//!
//! This layer provides the eager sequence operators. Every operator takes a
//! sequence plus its own arguments (predicate, selector, comparer, seed,
//! count), validates, scans once and returns either a scalar or a freshly
//! allocated container of the input's shape family.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Operators ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Numeric
//!   ↓
//! Layer 1: Primitives
//! ```

/// Any/all, count, contains and sequence comparison.
pub mod scalar;

/// First, last and single.
pub mod selection;

/// Minimum/maximum, sum/average and aggregate.
pub mod reduction;

/// Select, select-many and filter.
pub mod transform;

/// Single-pass filter+select, select+filter, filter+aggregate and filter+sum.
pub mod fused;

/// Take/skip, reverse, zip, range and distinct-in-place.
pub mod shape;

/// Order-by.
pub mod ordering;
