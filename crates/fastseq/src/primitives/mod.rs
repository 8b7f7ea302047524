//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared vocabulary of the crate: the error
//! taxonomy, the sequence shape traits and the comparison capabilities. It
//! has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Operators
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Numeric
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Sequence shape traits.
pub mod sequence;

/// Ordering and equality adapters.
pub mod comparer;
