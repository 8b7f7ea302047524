//! # fastseq — Eager, Allocation-Conscious Sequence Operators for Rust
//!
//! Query-style operators (filter, select, aggregate, min/max, take/skip, ...)
//! over contiguous sequences: arrays, slices, boxed slices and vectors.
//! Every operator runs to completion in one call and returns either a scalar
//! or a freshly allocated container trimmed to exactly its length.
//!
//! ## Why eager?
//!
//! Lazy iterator pipelines are the right default for most code. Hot loops
//! that materialise their results anyway pay for adapter state and growth
//! reallocations they do not need. The operators here scan once, allocate
//! once and keep the shape of their input: an array-like input yields a
//! `Box<[U]>`, a `Vec` yields a `Vec`.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastseq::prelude::*;
//!
//! let readings = vec![3, -1, 4, 1, -5, 9, 2, 6];
//!
//! // Filter and map in a single pass
//! let doubled: Vec<i32> = filter_select(&readings, |x| *x > 0, |x| x * 2);
//! assert_eq!(doubled, vec![6, 8, 2, 18, 4, 12]);
//!
//! // Numeric reductions report empty input and overflow
//! assert_eq!(sum(&readings)?, 19);
//! assert_eq!(max(&readings)?, 9);
//!
//! // Fixed-size inputs produce boxed slices
//! let firsts: Box<[i32]> = take(&[1, 2, 3, 4], 2);
//! assert_eq!(&*firsts, &[1, 2]);
//! # Result::<(), SequenceError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operators that can fail return `Result<_, SequenceError>`:
//!
//! ```rust
//! use fastseq::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! assert_eq!(average(&empty), Err(SequenceError::NoElements));
//! assert_eq!(first_where(&[1, 3, 5], |x| x % 2 == 0), Err(SequenceError::NoMatch));
//! assert_eq!(sum(&[i8::MAX, 1]), Err(SequenceError::Overflow));
//!
//! // OrDefault variants turn absence into the type's default
//! assert_eq!(first_or_default_where(&[1, 3, 5], |x| x % 2 == 0), 0);
//! ```
//!
//! ### In-place operators
//!
//! ```rust
//! use fastseq::prelude::*;
//!
//! let mut values = vec![3, 1, 2, 1, 3];
//! distinct_in_place(&mut values);
//! assert_eq!(values, vec![1, 2, 3]);
//!
//! reverse_in_place(&mut values);
//! select_in_place(&mut values, |x| x * 10);
//! assert_eq!(values, vec![30, 20, 10]);
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with an allocator. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! fastseq = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and `std::error::Error`.
//! - `decimal`: `rust_decimal::Decimal` as a numeric width for sum, average,
//!   min and max.
//! - `dev`: exposes internal layers for integration tests.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, sequence shapes and comparers.
mod primitives;

// Layer 2: Numeric - per-width summation and extremum rules.
mod numeric;

// Layer 3: Engine - argument validation.
mod engine;

// Layer 4: Operators - the eager sequence operators.
mod operators;

// Standard fastseq prelude.
pub mod prelude {
    pub use crate::numeric::{
        extremum::Extremum,
        summation::{Averageable, Summable},
    };
    pub use crate::operators::{
        fused::{
            filter_aggregate, filter_aggregate_indexed, filter_aggregate_seeded,
            filter_aggregate_seeded_with, filter_select, filter_select_indexed, filter_sum,
            filter_sum_of, select_filter, select_filter_indexed,
        },
        ordering::{order_by, order_by_descending, order_in_place_by},
        reduction::{
            aggregate, aggregate_seeded, aggregate_seeded_with, average, average_of, max, max_by,
            max_of, max_of_by, max_ord, max_present, min, min_by, min_of, min_of_by, min_ord,
            min_present, sum, sum_of,
        },
        scalar::{
            all, any, any_where, contains, contains_by, count, count_where, sequence_compare,
            sequence_compare_by, sequence_equal, sequence_equal_by,
        },
        selection::{
            first, first_or_default, first_or_default_where, first_where, last, last_or_default,
            last_or_default_where, last_where, single, single_or_default,
            single_or_default_where, single_where,
        },
        shape::{
            distinct_in_place, distinct_in_place_by, range, reverse, reverse_in_place, skip,
            skip_while, skip_while_indexed, take, take_while, take_while_indexed, zip,
        },
        transform::{
            filter, filter_indexed, select, select_in_place, select_in_place_indexed,
            select_indexed, select_many, select_many_indexed,
        },
    };
    pub use crate::primitives::{
        comparer,
        errors::SequenceError,
        sequence::{FromExact, Growable, Sequence, SequenceMut},
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod numeric {
        pub use crate::numeric::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod operators {
        pub use crate::operators::*;
    }
}
