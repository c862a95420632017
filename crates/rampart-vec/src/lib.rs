// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity vector with inline storage and strong failure guarantees.
//!
//! [`FixedVec<T, N>`] behaves like a `Vec<T>` whose capacity is fixed at
//! compile time: familiar insert/erase/resize/swap semantics, zero heap
//! allocation, and a `Result` wherever a growing `Vec` would silently
//! reallocate. Exceeding the bound is always a reported failure, never a
//! reallocation.
//!
//! # Core Guarantees
//!
//! - **Bounded storage**: at most `N` elements, stored inline. Placing large
//!   instances on the stack is the caller's trade-off to make.
//! - **Strong failure guarantee**: a failed operation leaves the vector
//!   observably unchanged. Operations whose final size is knowable check it
//!   before mutating; the single-pass insertion path
//!   ([`FixedVec::insert_from_iter`]) instead works speculatively and rolls
//!   back exactly on overflow.
//! - **Checked end ops**: [`FixedVec::pop`] on an empty vector reports
//!   [`FixedVecError::Empty`] instead of being a precondition violation.
//!
//! # Example
//!
//! ```rust
//! use rampart_vec::{FixedVec, FixedVecError};
//!
//! fn example() -> Result<(), FixedVecError> {
//!     let mut vec = FixedVec::<u8, 4>::new();
//!     vec.push(1)?;
//!     vec.insert_from_slice(1, &[2, 3])?;
//!     assert_eq!(vec.as_slice(), &[1, 2, 3]);
//!
//!     // A fourth element still fits, a fifth does not.
//!     vec.push(4)?;
//!     assert!(vec.push(5).is_err());
//!     assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Interop with heap-backed `Vec<T>` (swapping, comparison) lives behind the
//! `alloc` feature.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

mod error;
mod fixed_vec;
mod iter;

#[cfg(test)]
mod tests;

pub use error::FixedVecError;
pub use fixed_vec::FixedVec;
pub use iter::IntoIter;
