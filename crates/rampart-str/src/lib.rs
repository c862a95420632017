// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity byte string with inline storage and a maintained
//! terminator.
//!
//! [`FixedStr<N>`] behaves like a growable string whose capacity is fixed
//! at compile time: insert/erase/append/assign/search/compare with zero
//! heap allocation, a permanently maintained zero terminator after the
//! live content, and a `Result` wherever a growable string would
//! reallocate.
//!
//! # Core Guarantees
//!
//! - **Bounded storage**: at most `N` byte code units, stored inline,
//!   plus one reserved terminator unit.
//! - **Strong failure guarantee**: every mutation checks the resulting
//!   length before touching the buffer; a failed call leaves content,
//!   length, and terminator untouched.
//! - **One shifting primitive**: insert, erase, append, and assign are all
//!   expressed through [`FixedStr::replace`], so the window arithmetic
//!   lives in exactly one place.
//!
//! # Example
//!
//! ```rust
//! use rampart_str::{FixedStr, FixedStrError};
//!
//! fn example() -> Result<(), FixedStrError> {
//!     let mut s = FixedStr::<12>::try_from("Hello World")?;
//!     s.replace(0..5, b"Bye")?;
//!     assert_eq!(s, "Bye World");
//!
//!     assert_eq!(s.find(b"World", 0), Some(4));
//!     assert!(s.append(b" again").is_err());
//!     assert_eq!(s, "Bye World");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Content is fixed-width byte code units, not code points; UTF-8 views
//! are available through [`FixedStr::as_str`] when the content allows it.
//! Interop with heap-backed `Vec<u8>` lives behind the `alloc` feature.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

mod error;
mod fixed_str;
mod num;
mod search;

#[cfg(test)]
mod tests;

pub use error::{FixedStrError, ParseError};
pub use fixed_str::FixedStr;
pub use num::ParseInt;
