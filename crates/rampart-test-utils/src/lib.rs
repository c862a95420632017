// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Rampart crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod single_pass;
mod tracked;

pub use single_pass::{SinglePass, single_pass};
pub use tracked::{LiveSet, Tracked};
