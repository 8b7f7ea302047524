//! Layer 2: Numeric
//!
//! # Purpose
//!
//! This layer bundles the per-width numeric contracts used by the reduction
//! operators, so each operator family is written once:
//! - Summation and averaging with overflow and precision policies
//! - Minimum and maximum scans with NaN policies
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Operators
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Numeric ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sum and average accumulation per width.
pub mod summation;

/// Minimum and maximum scans per width.
pub mod extremum;
