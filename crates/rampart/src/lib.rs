// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Fixed-capacity, allocation-free containers for real-time and embedded Rust.</em></p>
//!
//! ---
//!
//! Rampart provides two value-type containers that behave like `Vec` and
//! `String` but never touch the heap: capacity is a compile-time constant,
//! exceeding it is a reported failure instead of a reallocation, and every
//! failed operation leaves the container observably unchanged.
//!
//! # Features
//!
//! - **Zero allocation** — a single inline buffer, sized at compile time
//! - **Strong failure guarantee** — failed calls leave state untouched,
//!   including the single-pass insertion path, which rolls back exactly
//! - **Familiar mutation semantics** — insert, erase, append, resize,
//!   swap, search, compare
//! - **Cross-capacity interop** — instances of different capacity copy,
//!   move, swap, and compare against each other and against their
//!   heap-backed analogs (`alloc` feature)
//! - **`no_std` compatible** — works in embedded and WASI environments
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::{FixedStr, FixedVec};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut readings = FixedVec::<u16, 8>::new();
//!     readings.push(512)?;
//!     readings.insert_from_slice(0, &[100, 200])?;
//!     assert_eq!(readings.as_slice(), &[100, 200, 512]);
//!
//!     let mut label = FixedStr::<16>::try_from("sensor")?;
//!     label.append(b"-07")?;
//!     assert_eq!(label.as_bytes_with_nul(), b"sensor-07\0");
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub use rampart_str as str;
pub use rampart_vec as vec;

pub use rampart_str::{FixedStr, FixedStrError, ParseError, ParseInt};
pub use rampart_vec::{FixedVec, FixedVecError};
