// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart-vec.

use thiserror::Error;

/// Errors reported by [`FixedVec`](crate::FixedVec) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FixedVecError {
    /// The requested logical size exceeds the fixed capacity.
    #[error("capacity exceeded: requested {requested} elements, capacity is {capacity}")]
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

    /// Pop from an empty container.
    #[error("container is empty")]
    Empty,
}
