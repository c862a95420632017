// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-str.

use thiserror::Error;

/// Errors reported by [`FixedStr`](crate::FixedStr) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FixedStrError {
    /// The requested logical size exceeds the fixed capacity.
    #[error("capacity exceeded: requested {requested} code units, capacity is {capacity}")]
    CapacityExceeded {
        /// Logical size the operation would have produced.
        requested: usize,
        /// The fixed capacity `N`.
        capacity: usize,
    },

    /// Checked access or positioning beyond the current length.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length at the time of the call.
        len: usize,
    },

    /// Pop from an empty string.
    #[error("string is empty")]
    Empty,
}

/// Errors reported by the numeric parsing utilities.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No digit could be consumed from the input.
    #[error("no digits found in input")]
    InvalidFormat,

    /// The parsed magnitude does not fit the destination type.
    #[error("parsed value out of range for the destination type")]
    OutOfRange,
}
