//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer holds the argument validation every operator runs before it
//! starts scanning.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Operators
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Numeric
//!   ↓
//! Layer 1: Primitives
//! ```

/// Argument validation.
pub mod validator;
